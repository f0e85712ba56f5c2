//! Dashboard sidebar menu model.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every signed-in user gets the default entries; role entries follow them.
//! Paths are relative to `/dashboard`.

#[cfg(test)]
#[path = "drawer_test.rs"]
mod drawer_test;

use crate::net::types::Role;

pub const DASHBOARD_ROOT: &str = "/dashboard";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DrawerItem {
    pub title: &'static str,
    pub path: &'static str,
}

impl DrawerItem {
    #[must_use]
    pub fn href(&self) -> String {
        format!("{DASHBOARD_ROOT}/{}", self.path)
    }

    /// Exact match against the current pathname; a trailing `/` is ignored.
    #[must_use]
    pub fn is_active(&self, pathname: &str) -> bool {
        pathname.trim_end_matches('/') == self.href()
    }
}

const DEFAULT_ITEMS: [DrawerItem; 2] = [
    DrawerItem { title: "Profile", path: "profile" },
    DrawerItem { title: "Change Password", path: "change-password" },
];

const ADMIN_ITEMS: [DrawerItem; 1] = [DrawerItem { title: "Reviews", path: "admin/reviews" }];

const USER_ITEMS: [DrawerItem; 2] = [
    DrawerItem { title: "My Posts", path: "my-posts" },
    DrawerItem { title: "My Bookings", path: "my-bookings" },
];

/// Sidebar entries for `role`, defaults first.
#[must_use]
pub fn drawer_items(role: Role) -> Vec<DrawerItem> {
    let role_items: &[DrawerItem] = match role {
        Role::Admin => &ADMIN_ITEMS,
        Role::User => &USER_ITEMS,
    };
    DEFAULT_ITEMS.iter().chain(role_items).copied().collect()
}
