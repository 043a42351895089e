/// Configuration constants for the platform API
pub mod api {
    /// Object store collection holding solution records
    pub const SOLUTIONS: &str = "objstore/v1beta/objects/extensibility:solution";

    /// Filter clause selecting subscribed solutions
    pub const FILTER_SUBSCRIBED: &str = "data.isSubscribed eq true";

    /// Filter clause selecting solutions the tenant is not subscribed to
    pub const FILTER_UNSUBSCRIBED: &str = "data.isSubscribed ne true";
}

/// Object store layer headers
pub mod headers {
    /// Header naming the layer type
    pub const LAYER_TYPE: &str = "layer-type";

    /// Header naming the layer id
    pub const LAYER_ID: &str = "layer-id";

    /// Layer type used for tenant-scoped requests
    pub const TENANT_LAYER: &str = "TENANT";
}

/// Configuration constants for named contexts
pub mod context {
    /// Directory under HOME holding the config file
    pub const DIR_NAME: &str = ".solctl";

    /// Config file name
    pub const FILE_NAME: &str = "config.json";

    /// Environment variable selecting the active context
    pub const ENV_VAR: &str = "SOLCTL_CONTEXT";
}

/// Environment variables for connection settings
pub mod env {
    /// Platform base URL
    pub const URL: &str = "SOLCTL_URL";

    /// Tenant id
    pub const TENANT: &str = "SOLCTL_TENANT";

    /// API token
    pub const TOKEN: &str = "SOLCTL_TOKEN";
}

/// Default values for CLI
pub mod defaults {
    /// Default log level
    pub const LOG_LEVEL: &str = "warn";
}
