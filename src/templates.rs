//! HTML pages for the public catalog

use crate::services::{BookDetail, Catalog};

/// Escape text for use in HTML element content and quoted attributes
pub fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n</head>\n<body>\n{}</body>\n</html>\n",
        escape(title),
        body
    )
}

pub fn all_books(catalog: &Catalog) -> String {
    let mut body = String::from("<h1>All Books</h1>\n<ul>\n");
    for book in &catalog.books {
        body.push_str(&format!(
            "<li><a href=\"{}\">{} ({})</a></li>\n",
            escape(&book.absolute_url()),
            escape(&book.title),
            book.rating
        ));
    }
    body.push_str("</ul>\n");

    let average = catalog
        .average_rating
        .map(|avg| format!("{:.1}", avg))
        .unwrap_or_else(|| "n/a".to_string());
    body.push_str(&format!(
        "<p>Total number of books: {}</p>\n<p>Average rating: {}</p>\n",
        catalog.total, average
    ));

    page("All Books", &body)
}

pub fn book_detail(book: &BookDetail) -> String {
    let mut body = format!(
        "<h1>{}</h1>\n<h2>{}</h2>\n<p>Rating: {}</p>\n",
        escape(&book.title),
        escape(book.author.as_deref().unwrap_or("Unknown author")),
        book.rating
    );

    if book.is_bestselling {
        body.push_str("<p>This is a bestseller!</p>\n");
    } else {
        body.push_str("<p>Not a bestseller.</p>\n");
    }

    if !book.countries.is_empty() {
        let names: Vec<String> = book.countries.iter().map(|c| escape(&c.name)).collect();
        body.push_str(&format!("<p>Published in: {}</p>\n", names.join(", ")));
    }

    page(&book.title, &body)
}

pub fn not_found(what: &str) -> String {
    page(
        "Not Found",
        &format!("<h1>Not Found</h1>\n<p>{}</p>\n", escape(what)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Book, Country};

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#x27;Jerry&#x27;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_all_books_page() {
        let catalog = Catalog {
            books: vec![Book {
                id: 1,
                title: "Harry Potter 1".to_string(),
                rating: 5,
                slug: "harry-potter-1".to_string(),
                is_bestselling: true,
                author_id: None,
                author: None,
                countries: vec![],
            }],
            total: 1,
            average_rating: Some(5.0),
        };

        let html = all_books(&catalog);
        assert!(html.contains("<a href=\"/book-detail/harry-potter-1\">Harry Potter 1 (5)</a>"));
        assert!(html.contains("Total number of books: 1"));
        assert!(html.contains("Average rating: 5.0"));
    }

    #[test]
    fn test_empty_catalog_has_no_average() {
        let catalog = Catalog {
            books: vec![],
            total: 0,
            average_rating: None,
        };
        assert!(all_books(&catalog).contains("Average rating: n/a"));
    }

    #[test]
    fn test_book_detail_page() {
        let detail = BookDetail {
            title: "Harry Potter 1".to_string(),
            author: Some("J.K. Rowling".to_string()),
            rating: 5,
            is_bestselling: true,
            countries: vec![Country {
                id: 1,
                name: "United Kingdom".to_string(),
                code: "GB".to_string(),
            }],
        };

        let html = book_detail(&detail);
        assert!(html.contains("<h1>Harry Potter 1</h1>"));
        assert!(html.contains("<h2>J.K. Rowling</h2>"));
        assert!(html.contains("Rating: 5"));
        assert!(html.contains("This is a bestseller!"));
        assert!(html.contains("Published in: United Kingdom"));
    }

    #[test]
    fn test_book_detail_without_author() {
        let detail = BookDetail {
            title: "My Story".to_string(),
            author: None,
            rating: 2,
            is_bestselling: false,
            countries: vec![],
        };

        let html = book_detail(&detail);
        assert!(html.contains("Unknown author"));
        assert!(html.contains("Not a bestseller."));
        assert!(!html.contains("Published in"));
    }
}
