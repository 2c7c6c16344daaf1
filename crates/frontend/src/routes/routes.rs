use crate::domain::a001_store::ui::list::StoresPage;
use crate::layout::center::Center;
use crate::layout::global_context::use_global_context;
use crate::layout::left::sidebar::Sidebar;
use crate::layout::Shell;
use crate::system::pages::dashboard::DashboardPage;
use crate::system::pages::firmware::FirmwarePage;
use crate::system::pages::users::UsersPage;
use contracts::shared::i18n::Labels;
use leptos::prelude::*;

/// Pages reachable from the sidebar.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash)]
pub enum Route {
    #[default]
    Dashboard,
    Stores,
    Firmware,
    Users,
}

impl Route {
    pub fn key(&self) -> &'static str {
        match self {
            Route::Dashboard => "dashboard",
            Route::Stores => "stores",
            Route::Firmware => "firmware",
            Route::Users => "users",
        }
    }

    /// Unknown keys land on the dashboard.
    pub fn from_key(key: &str) -> Self {
        Route::all()
            .into_iter()
            .find(|r| r.key() == key)
            .unwrap_or_default()
    }

    pub fn all() -> [Route; 4] {
        [Route::Dashboard, Route::Stores, Route::Firmware, Route::Users]
    }

    pub fn label(&self, labels: &'static Labels) -> &'static str {
        match self {
            Route::Dashboard => labels.menu.dashboard,
            Route::Stores => labels.menu.stores,
            Route::Firmware => labels.menu.firmware,
            Route::Users => labels.menu.users,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Route::Dashboard => "dashboard",
            Route::Stores => "store",
            Route::Firmware => "cpu",
            Route::Users => "users",
        }
    }
}

#[component]
fn RouteView() -> impl IntoView {
    let ctx = use_global_context();

    move || match ctx.route.get() {
        Route::Dashboard => view! { <DashboardPage /> }.into_any(),
        Route::Stores => view! { <StoresPage /> }.into_any(),
        Route::Firmware => view! { <FirmwarePage /> }.into_any(),
        Route::Users => view! { <UsersPage /> }.into_any(),
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=|| view! { <Center><RouteView /></Center> }.into_any()
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::i18n::ENGLISH;

    #[test]
    fn test_route_keys() {
        for route in Route::all() {
            assert_eq!(Route::from_key(route.key()), route);
        }
    }

    #[test]
    fn test_unknown_key_falls_back_to_dashboard() {
        assert_eq!(Route::from_key("logs"), Route::Dashboard);
        assert_eq!(Route::from_key(""), Route::Dashboard);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Route::Stores.label(&ENGLISH), "Stores & Branches");
        assert_eq!(Route::Firmware.label(&ENGLISH), "Firmware Updates");
    }
}
