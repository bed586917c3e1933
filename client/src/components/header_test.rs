use super::*;

fn hrefs(links: &[NavLink]) -> Vec<&'static str> {
    links.iter().map(|link| link.href).collect()
}

#[test]
fn signed_out_links_hide_courses() {
    assert_eq!(
        hrefs(&visible_links(false)),
        vec!["/", "/explore", "/about", "/contact", "/register", "/login"]
    );
}

#[test]
fn signed_in_links_include_courses_in_order() {
    assert_eq!(
        hrefs(&visible_links(true)),
        vec!["/", "/explore", "/courses", "/about", "/contact", "/register", "/login"]
    );
}

#[test]
fn only_courses_requires_a_session() {
    let gated: Vec<_> = NAV_LINKS.iter().filter(|l| l.requires_session).map(|l| l.label).collect();
    assert_eq!(gated, vec!["Courses"]);
}
