// Static route catalog
// Maps each (role, module) pair to its page route, loaded once at startup

use std::fmt;

/// Request originator category. Each role has its own module table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    GeneralUser,
    ServiceProvider,
}

impl Role {
    /// Parse the wire name used by the classification prompt and API.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "general_user" => Some(Role::GeneralUser),
            "service_provider" => Some(Role::ServiceProvider),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::GeneralUser => "general_user",
            Role::ServiceProvider => "service_provider",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One platform module: canonical name, page route, page copy, and the
/// one-line description embedded in the classification prompt.
#[derive(Debug, Clone, Copy)]
pub struct ModuleEntry {
    /// Canonical lowercase module name ("food delivery")
    pub name: &'static str,
    /// Page route ("/food-delivery")
    pub path: &'static str,
    /// Page heading ("Food Delivery")
    pub title: &'static str,
    /// One-sentence page body
    pub blurb: &'static str,
    /// Prompt description for the classifier
    pub hint: &'static str,
}

const GENERAL_USER_MODULES: &[ModuleEntry] = &[
    ModuleEntry {
        name: "account creation",
        path: "/account",
        title: "Account Creation",
        blurb: "Create your Tudo Num account.",
        hint: "for users creating new accounts",
    },
    ModuleEntry {
        name: "task booking",
        path: "/task-booking",
        title: "Task Booking",
        blurb: "Book any home or professional service easily.",
        hint: "for users booking home or professional services (e.g., plumber, electrician)",
    },
    ModuleEntry {
        name: "food delivery",
        path: "/food-delivery",
        title: "Food Delivery",
        blurb: "Order meals from your favorite restaurants.",
        hint: "for ordering meals from restaurants, hotels, or cafes",
    },
    ModuleEntry {
        name: "taxi booking",
        path: "/taxi-booking",
        title: "Taxi Booking",
        blurb: "Book rides instantly via Tudo Num Transport.",
        hint: "for booking rides, cars, or autos",
    },
    ModuleEntry {
        name: "grocery",
        path: "/grocery",
        title: "Grocery",
        blurb: "Shop groceries and essentials online.",
        hint: "for buying daily essentials and grocery items online",
    },
    ModuleEntry {
        name: "e-commerce",
        path: "/ecommerce",
        title: "E-Commerce",
        blurb: "Shop electronics, fashion, and more.",
        hint: "for shopping online for electronics, clothing, or household items",
    },
    ModuleEntry {
        name: "wallet",
        path: "/wallet",
        title: "Wallet",
        blurb: "Track your balance and transactions.",
        hint: "for viewing balance, payments, and transaction history",
    },
    ModuleEntry {
        name: "consultation booking",
        path: "/consultation-booking",
        title: "Consultation Booking",
        blurb: "Book health or professional consultations.",
        hint: "for scheduling health or expert consultations",
    },
    ModuleEntry {
        name: "profile setting",
        path: "/profile-setting",
        title: "Profile Settings",
        blurb: "Update your preferences and account info.",
        hint: "for changing user details and preferences",
    },
];

const SERVICE_PROVIDER_MODULES: &[ModuleEntry] = &[
    ModuleEntry {
        name: "profile completion",
        path: "/provider/profile-completion",
        title: "Profile Completion",
        blurb: "Complete your provider verification and details.",
        hint: "for providers completing verification and personal details",
    },
    ModuleEntry {
        name: "vendor profile",
        path: "/provider/vendor-profile",
        title: "Vendor Profile",
        blurb: "Manage your vendor details and analytics.",
        hint: "for businesses or sellers managing their store profiles",
    },
    ModuleEntry {
        name: "food partner",
        path: "/provider/food-partner",
        title: "Food Partner",
        blurb: "Register as a restaurant or food partner.",
        hint: "for restaurants, hotels, or cafes registering to deliver food",
    },
    ModuleEntry {
        name: "driver registration",
        path: "/provider/driver-registration",
        title: "Driver & Vehicle Registration",
        blurb: "Register your vehicle and start earning.",
        hint: "for drivers or riders registering their vehicles for rides or delivery",
    },
    ModuleEntry {
        name: "e-commerce store setup",
        path: "/provider/store-setup",
        title: "E-Commerce Store Setup",
        blurb: "Set up your online store and upload products.",
        hint: "for merchants or vendors creating an online store to sell products",
    },
    ModuleEntry {
        name: "marketplace",
        path: "/provider/marketplace",
        title: "Marketplace",
        blurb: "List your services in the Tudo marketplace.",
        hint: "for providers listing services on the Tudo marketplace",
    },
    ModuleEntry {
        name: "classified vendors",
        path: "/provider/classified-vendors",
        title: "Classified Vendors",
        blurb: "Post items for sale like phones or laptops.",
        hint: "for individuals selling used or personal items like phones or laptops",
    },
];

/// The two per-role route tables. Built once at startup and shared read-only.
#[derive(Debug, Clone)]
pub struct RouteCatalog {
    general: &'static [ModuleEntry],
    provider: &'static [ModuleEntry],
}

impl RouteCatalog {
    /// The built-in Tudo Num catalog.
    pub fn builtin() -> Self {
        Self {
            general: GENERAL_USER_MODULES,
            provider: SERVICE_PROVIDER_MODULES,
        }
    }

    /// Module entries for one role, in catalog order.
    pub fn modules(&self, role: Role) -> &'static [ModuleEntry] {
        match role {
            Role::GeneralUser => self.general,
            Role::ServiceProvider => self.provider,
        }
    }

    /// All entries across both roles.
    pub fn all_modules(&self) -> impl Iterator<Item = &'static ModuleEntry> + '_ {
        self.general.iter().chain(self.provider.iter())
    }

    /// Resolve a classified (role, module) pair to its route.
    ///
    /// Module names are compared after lowercase normalization; the model is
    /// asked for exact names but capitalizes them often enough.
    pub fn resolve(&self, role: Role, module: &str) -> Option<&'static ModuleEntry> {
        let module = module.trim().to_lowercase();
        self.modules(role).iter().find(|e| e.name == module)
    }
}
