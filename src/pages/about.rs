use crate::models::{Block, Inline, LinkDescriptor, Page};

const INTRO: [&str; 4] = [
    "I'm a Software and Infrastructure developer with over 5+ years, and I've been leading some engineering teams in recent years.",
    "Expert at AWS by using Server-less architecture. Also a master of Server-side API and Batch with Python.",
    "Additionally, experienced data science with Python and AWS.",
    "I have lectured at AWS Summit Tokyo 19 with company booth. I have AWS Certified Solution Architect – Professional.",
];

/// Child of the About page. It has no route, so following it shows the 404 page.
const WHOA_PATH: &str = "/about/whoa";

/// About page: intro followed by the summary section.
pub fn about() -> Page {
    let mut body = vec![Block::subheading("About tubone24")];
    body.extend(INTRO.into_iter().map(Block::paragraph));
    body.push(Block::Rule);
    body.push(Block::paragraph(INTRO.join(" ")));
    body.push(Block::rich(vec![Inline::strong_link(
        WHOA_PATH,
        "Check out one of them here.",
    )]));

    Page::new(body)
        .with_title("About tubone24")
        .with_class("about")
        .with_link(LinkDescriptor::stylesheet("/styles/about.css"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_about_page() {
        let page = about();
        assert_eq!(page.meta.title.as_deref(), Some("About tubone24"));
        assert_eq!(page.links, vec![LinkDescriptor::stylesheet("/styles/about.css")]);
        assert_eq!(page.body.first(), Some(&Block::subheading("About tubone24")));
        assert!(page.body.contains(&Block::Rule));
    }

    #[test]
    fn test_about_child_link_is_not_found() {
        let link = Block::rich(vec![Inline::strong_link(
            WHOA_PATH,
            "Check out one of them here.",
        )]);
        assert_eq!(about().body.last(), Some(&link));
        assert_eq!(
            crate::core::resolve(WHOA_PATH),
            crate::core::RouteOutcome::from(crate::models::CaughtRouteFailure::not_found())
        );
    }
}
