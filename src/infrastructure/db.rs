use sea_orm::{ConnectionTrait, Database, DatabaseConnection, DbErr, Statement};

pub async fn init_db(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect(database_url).await?;

    // Cascade rules below are only enforced with foreign keys on
    execute(&db, "PRAGMA foreign_keys = ON").await?;

    run_migrations(&db).await?;

    tracing::debug!("Database ready at {}", database_url);
    Ok(db)
}

async fn execute(db: &DatabaseConnection, sql: &str) -> Result<(), DbErr> {
    db.execute(Statement::from_string(
        db.get_database_backend(),
        sql.to_owned(),
    ))
    .await?;
    Ok(())
}

async fn run_migrations(db: &DatabaseConnection) -> Result<(), DbErr> {
    execute(
        db,
        r#"
        CREATE TABLE IF NOT EXISTS countries (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL CHECK (length(name) <= 80),
            code TEXT NOT NULL CHECK (length(code) = 2)
        )
        "#,
    )
    .await?;

    execute(
        db,
        r#"
        CREATE TABLE IF NOT EXISTS addresses (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            street TEXT NOT NULL CHECK (length(street) <= 80),
            postal_code TEXT NOT NULL CHECK (length(postal_code) <= 5),
            city TEXT NOT NULL CHECK (length(city) <= 50)
        )
        "#,
    )
    .await?;

    execute(
        db,
        r#"
        CREATE TABLE IF NOT EXISTS authors (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            first_name TEXT NOT NULL CHECK (length(first_name) <= 100),
            last_name TEXT NOT NULL CHECK (length(last_name) <= 100),
            address_id INTEGER UNIQUE,
            FOREIGN KEY (address_id) REFERENCES addresses(id) ON DELETE SET NULL
        )
        "#,
    )
    .await?;

    execute(
        db,
        r#"
        CREATE TABLE IF NOT EXISTS books (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL CHECK (length(title) <= 50),
            rating INTEGER NOT NULL CHECK (rating BETWEEN 1 AND 5),
            author_id INTEGER,
            is_bestselling BOOLEAN NOT NULL DEFAULT 0,
            slug TEXT NOT NULL DEFAULT '',
            FOREIGN KEY (author_id) REFERENCES authors(id) ON DELETE SET NULL
        )
        "#,
    )
    .await?;

    execute(
        db,
        "CREATE INDEX IF NOT EXISTS idx_books_slug ON books(slug)",
    )
    .await?;

    // Create book_countries junction table
    execute(
        db,
        r#"
        CREATE TABLE IF NOT EXISTS book_countries (
            book_id INTEGER NOT NULL,
            country_id INTEGER NOT NULL,
            PRIMARY KEY (book_id, country_id),
            FOREIGN KEY (book_id) REFERENCES books(id) ON DELETE CASCADE,
            FOREIGN KEY (country_id) REFERENCES countries(id) ON DELETE CASCADE
        )
        "#,
    )
    .await?;

    Ok(())
}
