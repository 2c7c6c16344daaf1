//! Static UI labels.
//!
//! The language selector is cosmetic: every [`Language`] resolves to the
//! English [`Labels`].

use serde::Deserialize;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Az,
    Tr,
    Pl,
    Ru,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Az => "az",
            Language::Tr => "tr",
            Language::Pl => "pl",
            Language::Ru => "ru",
        }
    }

    pub fn short_name(&self) -> &'static str {
        match self {
            Language::En => "EN",
            Language::Az => "AZ",
            Language::Tr => "TR",
            Language::Pl => "PL",
            Language::Ru => "RU",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Az => "Azerbaijan",
            Language::Tr => "Turkish",
            Language::Pl => "Polish",
            Language::Ru => "Russian",
        }
    }

    pub fn from_code(code: &str) -> Result<Self, String> {
        Language::all()
            .into_iter()
            .find(|l| l.code() == code)
            .ok_or_else(|| format!("Unknown language code: {}", code))
    }

    pub fn all() -> [Language; 5] {
        [
            Language::En,
            Language::Az,
            Language::Tr,
            Language::Pl,
            Language::Ru,
        ]
    }

    pub fn labels(&self) -> &'static Labels {
        &ENGLISH
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct Labels {
    pub app_title: &'static str,
    pub footer: &'static str,
    pub menu: MenuLabels,
    pub common: CommonLabels,
    pub dashboard: DashboardLabels,
    pub stores: StoresLabels,
    pub firmware: FirmwareLabels,
    pub users: UsersLabels,
}

#[derive(Debug, PartialEq, Eq)]
pub struct MenuLabels {
    pub dashboard: &'static str,
    pub stores: &'static str,
    pub firmware: &'static str,
    pub users: &'static str,
    pub toggle_sidebar: &'static str,
    pub toggle_theme: &'static str,
    pub language: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub struct CommonLabels {
    pub close: &'static str,
    pub copy: &'static str,
    pub copied: &'static str,
    pub copy_failed: &'static str,
    pub not_available: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub struct DashboardLabels {
    pub title: &'static str,
    pub welcome_text: &'static str,
    pub instruction_text: &'static str,
    pub note: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub struct StoresLabels {
    pub title: &'static str,
    pub store_list_title: &'static str,
    pub create_store_title: &'static str,
    pub create_store_desc: &'static str,
    pub create_store_action: &'static str,
    pub edit_store_title: &'static str,
    pub edit_store_desc: &'static str,
    pub edit_store_action: &'static str,
    pub delete_store_title: &'static str,
    pub delete_store_desc: &'static str,
    pub delete_store_action: &'static str,
    pub view_logs_title: &'static str,
    pub view_logs_desc: &'static str,
    pub view_logs_action: &'static str,
    pub filters_title: &'static str,
    pub country: &'static str,
    pub city: &'static str,
    pub country_placeholder: &'static str,
    pub city_placeholder: &'static str,
    pub no_suggestions: &'static str,
    pub opening_hour: &'static str,
    pub closing_hour: &'static str,
    pub select_hour: &'static str,
    pub all_day_open: &'static str,
    pub reset_filters: &'static str,
    pub name_header: &'static str,
    pub country_header: &'static str,
    pub city_header: &'static str,
    pub branch_header: &'static str,
    pub status_header: &'static str,
    pub working_hours_header: &'static str,
    pub no_stores_found: &'static str,
    pub catalog_error: &'static str,
    pub details_title: &'static str,
    pub address: &'static str,
    pub server_token: &'static str,
    pub created_at: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub struct FirmwareLabels {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub struct UsersLabels {
    pub title: &'static str,
    pub description: &'static str,
}

pub static ENGLISH: Labels = Labels {
    app_title: "EilSense.io",
    footer: "© 2025 EilSense.io. All rights reserved.",
    menu: MenuLabels {
        dashboard: "Dashboard",
        stores: "Stores & Branches",
        firmware: "Firmware Updates",
        users: "Users & Roles",
        toggle_sidebar: "Toggle sidebar",
        toggle_theme: "Toggle theme",
        language: "Language",
    },
    common: CommonLabels {
        close: "Close",
        copy: "Copy",
        copied: "Copied",
        copy_failed: "Copy failed. Please copy manually.",
        not_available: "N/A",
    },
    dashboard: DashboardLabels {
        title: "Dashboard",
        welcome_text: "Welcome!",
        instruction_text: "This area will summarize the overall status of your system.",
        note: "Use the menu on the left to manage stores, firmware and users.",
    },
    stores: StoresLabels {
        title: "Stores & Branches",
        store_list_title: "Store List",
        create_store_title: "Create New Store",
        create_store_desc: "Add a new store or branch to the system.",
        create_store_action: "Create Store",
        edit_store_title: "Edit Store Information",
        edit_store_desc: "Update details of existing stores or branches.",
        edit_store_action: "Edit Store",
        delete_store_title: "Delete Store",
        delete_store_desc: "Remove a store or branch from the system.",
        delete_store_action: "Delete Store",
        view_logs_title: "View Logs",
        view_logs_desc: "Access logs related to store operations.",
        view_logs_action: "View Logs",
        filters_title: "Filters",
        country: "Country",
        city: "City",
        country_placeholder: "Type a country and press Enter",
        city_placeholder: "Type a city and press Enter",
        no_suggestions: "No suggestions",
        opening_hour: "Opening Hour",
        closing_hour: "Closing Hour",
        select_hour: "Select Hour",
        all_day_open: "All Day Open (24/7)",
        reset_filters: "Reset Filters",
        name_header: "Store Name",
        country_header: "Country",
        city_header: "City",
        branch_header: "Branch",
        status_header: "Status",
        working_hours_header: "Working Hours",
        no_stores_found: "No stores found.",
        catalog_error: "Could not load store data.",
        details_title: "Store Details",
        address: "Address",
        server_token: "Server Token",
        created_at: "Created At",
    },
    firmware: FirmwareLabels {
        title: "Firmware Updates",
        description: "Firmware releases for store servers and ESP32 devices will be listed here.",
    },
    users: UsersLabels {
        title: "Users & Roles",
        description: "Company and supermarket users and their roles will be managed here.",
    },
};
