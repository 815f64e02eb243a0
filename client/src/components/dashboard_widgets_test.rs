use super::*;

#[test]
fn change_badge_highlights_positive_deltas() {
    assert_eq!(change_badge_class("+12.5%"), "badge badge--positive");
    assert_eq!(change_badge_class("+3"), "badge badge--positive");
    assert_eq!(change_badge_class("Optimal"), "badge badge--neutral");
}

#[test]
fn status_badge_maps_known_stages() {
    assert_eq!(status_badge_class("Production"), "badge badge--production");
    assert_eq!(status_badge_class("Development"), "badge badge--development");
    assert_eq!(status_badge_class("Preview"), "badge badge--neutral");
}

#[test]
fn project_initial_takes_first_char() {
    assert_eq!(project_initial("Vortex Website"), "V");
    assert_eq!(project_initial("Émile"), "É");
    assert_eq!(project_initial(""), "");
}
