use crate::models::{Block, Inline, Page};

/// Landing page.
pub fn home() -> Page {
    Page::new(vec![
        Block::heading("Hi, I'm tubone24"),
        Block::rich(vec![
            Inline::text("Software and infrastructure developer, mostly on "),
            Inline::strong("serverless AWS"),
            Inline::text("."),
        ]),
        Block::rich(vec![
            Inline::text("Find my writing on the blog, or "),
            Inline::link("/about", "read more about me"),
            Inline::text("."),
        ]),
    ])
    .with_title("tubone24")
    .with_description("Portfolio and links of tubone24.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_page() {
        let page = home();
        assert_eq!(page.meta.title.as_deref(), Some("tubone24"));
        assert_eq!(page.body.first(), Some(&Block::heading("Hi, I'm tubone24")));
        assert!(page.body.contains(&Block::rich(vec![
            Inline::text("Software and infrastructure developer, mostly on "),
            Inline::strong("serverless AWS"),
            Inline::text("."),
        ])));
    }
}
