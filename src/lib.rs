// API module: health + payment-intent endpoints
pub mod api {
    pub mod routes {
        pub mod health;
        pub mod pay;
    }

    pub mod services {
        pub mod pay;
    }

    pub mod dtos {
        pub mod health;
        pub mod pay;
    }

    pub mod mount;
}

// Site module: static assets + SPA fallback chain
pub mod site {
    pub mod routes {
        pub mod fallback;
    }

    pub mod mount;
}

// Common utilities module
pub mod common {
    pub mod env_config;
    pub mod error;
    pub mod http;
    pub mod stripe;
}

// Logger module
pub mod logger;

// Route-group assembly shared by main and the integration tests
pub mod app;

// Re-export commonly used items for convenience
pub use common::error::AppError;
pub use common::http::Success;
