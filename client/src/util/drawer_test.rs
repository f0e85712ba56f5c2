use super::*;

fn titles(role: Role) -> Vec<&'static str> {
    drawer_items(role).iter().map(|item| item.title).collect()
}

#[test]
fn admin_gets_defaults_then_reviews() {
    assert_eq!(titles(Role::Admin), ["Profile", "Change Password", "Reviews"]);
}

#[test]
fn user_gets_defaults_then_posts_and_bookings() {
    assert_eq!(titles(Role::User), ["Profile", "Change Password", "My Posts", "My Bookings"]);
}

#[test]
fn href_is_rooted_at_dashboard() {
    let reviews = drawer_items(Role::Admin)[2];
    assert_eq!(reviews.href(), "/dashboard/admin/reviews");
}

#[test]
fn active_item_matches_exact_pathname() {
    let profile = drawer_items(Role::User)[0];
    assert!(profile.is_active("/dashboard/profile"));
    assert!(profile.is_active("/dashboard/profile/"));
    assert!(!profile.is_active("/dashboard"));
    assert!(!profile.is_active("/dashboard/profile/edit"));
}
