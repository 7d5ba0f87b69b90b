pub mod cart;
pub mod catalog;
pub mod content;

/// Domain Events infrastructure
pub mod events {
    use crate::domain::catalog::value_objects::Handle;
    use std::fmt::Debug;

    /// Base trait for all domain events
    pub trait DomainEvent: Debug + Clone {
        fn event_type(&self) -> &'static str;
        fn timestamp(&self) -> u64 {
            js_sys::Date::now() as u64
        }
    }

    /// Events related to the shopping cart
    #[derive(Debug, Clone)]
    pub enum CartEvent {
        CartRefreshed {
            cart_id: String,
            line_count: usize,
        },
        CartMutationFailed {
            cart_id: String,
            reason: String,
        },
        CartValidationFailed {
            cart_id: String,
            reason: String,
        },
    }

    impl DomainEvent for CartEvent {
        fn event_type(&self) -> &'static str {
            match self {
                CartEvent::CartRefreshed { .. } => "CartRefreshed",
                CartEvent::CartMutationFailed { .. } => "CartMutationFailed",
                CartEvent::CartValidationFailed { .. } => "CartValidationFailed",
            }
        }
    }

    /// Events related to catalog and CMS content
    #[derive(Debug, Clone)]
    pub enum ContentEvent {
        CollectionLoaded {
            handle: Handle,
            product_count: usize,
        },
        CollectionLoadFailed {
            handle: Handle,
            reason: String,
        },
        ContentLoaded {
            nav_link_count: usize,
        },
    }

    impl DomainEvent for ContentEvent {
        fn event_type(&self) -> &'static str {
            match self {
                ContentEvent::CollectionLoaded { .. } => "CollectionLoaded",
                ContentEvent::CollectionLoadFailed { .. } => "CollectionLoadFailed",
                ContentEvent::ContentLoaded { .. } => "ContentLoaded",
            }
        }
    }

    /// Event dispatcher for publishing events
    pub trait EventDispatcher {
        fn publish_cart_event(&self, event: CartEvent);
        fn publish_content_event(&self, event: ContentEvent);
    }

    /// Simple in-memory event dispatcher
    pub struct InMemoryEventDispatcher {
        cart_handlers: Vec<Box<dyn Fn(&CartEvent)>>,
        content_handlers: Vec<Box<dyn Fn(&ContentEvent)>>,
    }

    impl InMemoryEventDispatcher {
        pub fn new() -> Self {
            Self {
                cart_handlers: Vec::new(),
                content_handlers: Vec::new(),
            }
        }

        pub fn subscribe_to_cart_events<F>(&mut self, handler: F)
        where
            F: Fn(&CartEvent) + 'static,
        {
            self.cart_handlers.push(Box::new(handler));
        }

        pub fn subscribe_to_content_events<F>(&mut self, handler: F)
        where
            F: Fn(&ContentEvent) + 'static,
        {
            self.content_handlers.push(Box::new(handler));
        }
    }

    impl Default for InMemoryEventDispatcher {
        fn default() -> Self {
            Self::new()
        }
    }

    impl EventDispatcher for InMemoryEventDispatcher {
        fn publish_cart_event(&self, event: CartEvent) {
            for handler in &self.cart_handlers {
                handler(&event);
            }
        }

        fn publish_content_event(&self, event: ContentEvent) {
            for handler in &self.content_handlers {
                handler(&event);
            }
        }
    }
}

/// Centralized logging system for the entire application
pub mod logging {
    use std::fmt::Display;

    /// Log levels for structured logging
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
    pub enum LogLevel {
        Trace = 0,
        Debug = 1,
        Info = 2,
        Warn = 3,
        Error = 4,
    }

    impl Display for LogLevel {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            match self {
                LogLevel::Trace => write!(f, "TRACE"),
                LogLevel::Debug => write!(f, "DEBUG"),
                LogLevel::Info => write!(f, "INFO"),
                LogLevel::Warn => write!(f, "WARN"),
                LogLevel::Error => write!(f, "ERROR"),
            }
        }
    }

    /// Component/Layer identification for logging
    #[derive(Debug, Clone)]
    pub enum LogComponent {
        Domain(&'static str),         // e.g., "Cart", "Catalog"
        Application(&'static str),    // e.g., "CartService", "LoadCollection"
        Infrastructure(&'static str), // e.g., "CommerceAPI", "CMS", "Storage"
        Presentation(&'static str),   // e.g., "App", "ProductGrid"
    }

    impl Display for LogComponent {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            match self {
                LogComponent::Domain(name) => write!(f, "🏛️ Domain::{}", name),
                LogComponent::Application(name) => write!(f, "🎯 Application::{}", name),
                LogComponent::Infrastructure(name) => write!(f, "🔧 Infrastructure::{}", name),
                LogComponent::Presentation(name) => write!(f, "🌐 Presentation::{}", name),
            }
        }
    }

    /// Structured log entry
    #[derive(Debug, Clone)]
    pub struct LogEntry {
        pub timestamp: u64,
        pub level: LogLevel,
        pub component: LogComponent,
        pub message: String,
        pub metadata: Option<String>,
    }

    /// Centralized logger trait
    pub trait Logger: Send + Sync {
        fn log(&self, entry: LogEntry);

        fn trace(&self, component: LogComponent, message: &str) {
            self.log(LogEntry::new(LogLevel::Trace, component, message.to_string()));
        }

        fn debug(&self, component: LogComponent, message: &str) {
            self.log(LogEntry::new(LogLevel::Debug, component, message.to_string()));
        }

        fn info(&self, component: LogComponent, message: &str) {
            self.log(LogEntry::new(LogLevel::Info, component, message.to_string()));
        }

        fn warn(&self, component: LogComponent, message: &str) {
            self.log(LogEntry::new(LogLevel::Warn, component, message.to_string()));
        }

        fn error(&self, component: LogComponent, message: &str) {
            self.log(LogEntry::new(LogLevel::Error, component, message.to_string()));
        }

        /// Log with metadata (e.g., JSON, additional context)
        fn log_with_metadata(
            &self,
            level: LogLevel,
            component: LogComponent,
            message: &str,
            metadata: &str,
        ) {
            self.log(LogEntry::new_with_metadata(
                level,
                component,
                message.to_string(),
                metadata.to_string(),
            ));
        }
    }

    impl LogEntry {
        pub fn new(level: LogLevel, component: LogComponent, message: String) -> Self {
            Self {
                timestamp: js_sys::Date::now() as u64,
                level,
                component,
                message,
                metadata: None,
            }
        }

        pub fn new_with_metadata(
            level: LogLevel,
            component: LogComponent,
            message: String,
            metadata: String,
        ) -> Self {
            Self {
                timestamp: js_sys::Date::now() as u64,
                level,
                component,
                message,
                metadata: Some(metadata),
            }
        }
    }

    /// Console logger implementation for WASM environment
    pub struct ConsoleLogger {
        min_level: LogLevel,
    }

    impl ConsoleLogger {
        pub fn new(min_level: LogLevel) -> Self {
            Self { min_level }
        }

        pub fn new_production() -> Self {
            Self::new(LogLevel::Info)
        }

        pub fn new_development() -> Self {
            Self::new(LogLevel::Debug)
        }

        fn format_log_entry(&self, entry: &LogEntry) -> String {
            let timestamp = Self::format_timestamp(entry.timestamp);
            match &entry.metadata {
                Some(metadata) => {
                    format!(
                        "[{}] {} {} | {} | {}",
                        timestamp, entry.level, entry.component, entry.message, metadata
                    )
                }
                None => {
                    format!(
                        "[{}] {} {} | {}",
                        timestamp, entry.level, entry.component, entry.message
                    )
                }
            }
        }

        fn format_timestamp(timestamp: u64) -> String {
            let date = js_sys::Date::new(&(timestamp as f64).into());
            format!(
                "{:02}:{:02}:{:02}.{:03}",
                date.get_hours(),
                date.get_minutes(),
                date.get_seconds(),
                date.get_milliseconds()
            )
        }
    }

    impl Logger for ConsoleLogger {
        fn log(&self, entry: LogEntry) {
            if entry.level >= self.min_level {
                let formatted = self.format_log_entry(&entry);

                match entry.level {
                    LogLevel::Trace | LogLevel::Debug => {
                        web_sys::console::debug_1(&formatted.into());
                    }
                    LogLevel::Info => {
                        web_sys::console::info_1(&formatted.into());
                    }
                    LogLevel::Warn => {
                        web_sys::console::warn_1(&formatted.into());
                    }
                    LogLevel::Error => {
                        web_sys::console::error_1(&formatted.into());
                    }
                }
            }
        }
    }

    /// Global logger instance using thread-safe static
    use std::sync::OnceLock;
    static GLOBAL_LOGGER: OnceLock<Box<dyn Logger + Sync + Send>> = OnceLock::new();

    /// Initialize global logger
    pub fn init_logger(logger: Box<dyn Logger + Sync + Send>) {
        let _ = GLOBAL_LOGGER.set(logger);
    }

    /// Get global logger reference
    pub fn get_logger() -> &'static dyn Logger {
        GLOBAL_LOGGER.get().map(|logger| logger.as_ref()).unwrap_or_else(|| {
            // Fallback to a no-op logger if not initialized
            static FALLBACK: NoOpLogger = NoOpLogger;
            &FALLBACK
        })
    }

    /// No-op logger for fallback
    struct NoOpLogger;

    impl Logger for NoOpLogger {
        fn log(&self, _entry: LogEntry) {
            // No-op
        }
    }

    /// Convenience macros for logging
    #[macro_export]
    macro_rules! log_trace {
        ($component:expr, $($arg:tt)*) => {
            $crate::domain::logging::get_logger().trace($component, &format!($($arg)*));
        };
    }

    #[macro_export]
    macro_rules! log_debug {
        ($component:expr, $($arg:tt)*) => {
            $crate::domain::logging::get_logger().debug($component, &format!($($arg)*));
        };
    }

    #[macro_export]
    macro_rules! log_info {
        ($component:expr, $($arg:tt)*) => {
            $crate::domain::logging::get_logger().info($component, &format!($($arg)*));
        };
    }

    #[macro_export]
    macro_rules! log_warn {
        ($component:expr, $($arg:tt)*) => {
            $crate::domain::logging::get_logger().warn($component, &format!($($arg)*));
        };
    }

    #[macro_export]
    macro_rules! log_error {
        ($component:expr, $($arg:tt)*) => {
            $crate::domain::logging::get_logger().error($component, &format!($($arg)*));
        };
    }
}

/// Centralized error handling for the entire application
pub mod errors {
    use std::fmt::{Display, Formatter, Result as FmtResult};

    /// Root error type for the entire application
    #[derive(Debug, Clone)]
    pub enum AppError {
        Domain(DomainError),
        Application(ApplicationError),
        Infrastructure(InfrastructureError),
        Presentation(PresentationError),
    }

    /// Domain layer specific errors
    #[derive(Debug, Clone)]
    pub enum DomainError {
        Validation(ValidationError),
    }

    /// Validation errors from domain services
    #[derive(Debug, Clone, PartialEq)]
    pub enum ValidationError {
        /// A single cart carries more than one currency; totals would be
        /// mislabeled, so aggregation refuses instead of guessing.
        MixedCurrencies { first: String, second: String },
        InvalidHandle(String),
        InvalidCurrencyCode(String),
    }

    /// Application layer errors
    #[derive(Debug, Clone)]
    pub enum ApplicationError {
        CartUnavailable(String),
        UseCaseFailed(String),
    }

    /// Infrastructure layer errors
    #[derive(Debug, Clone)]
    pub enum InfrastructureError {
        Network(NetworkError),
        Storage(String),
    }

    /// Network-related errors
    #[derive(Debug, Clone)]
    pub enum NetworkError {
        HttpRequestFailed(String),
        UnexpectedStatus(u16),
        DecodeFailed(String),
        GraphQl(String),
    }

    /// Presentation layer errors
    #[derive(Debug, Clone)]
    pub enum PresentationError {
        MountFailed(String),
    }

    impl Display for AppError {
        fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
            match self {
                AppError::Domain(e) => write!(f, "Domain Error: {}", e),
                AppError::Application(e) => write!(f, "Application Error: {}", e),
                AppError::Infrastructure(e) => write!(f, "Infrastructure Error: {}", e),
                AppError::Presentation(e) => write!(f, "Presentation Error: {}", e),
            }
        }
    }

    impl Display for DomainError {
        fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
            match self {
                DomainError::Validation(e) => write!(f, "Validation: {}", e),
            }
        }
    }

    impl Display for ValidationError {
        fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
            match self {
                ValidationError::MixedCurrencies { first, second } => {
                    write!(f, "cart mixes currencies {} and {}", first, second)
                }
                ValidationError::InvalidHandle(msg) => write!(f, "invalid handle: {}", msg),
                ValidationError::InvalidCurrencyCode(msg) => {
                    write!(f, "invalid currency code: {}", msg)
                }
            }
        }
    }

    impl Display for ApplicationError {
        fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
            match self {
                ApplicationError::CartUnavailable(msg) => write!(f, "cart unavailable: {}", msg),
                ApplicationError::UseCaseFailed(msg) => write!(f, "use case failed: {}", msg),
            }
        }
    }

    impl Display for InfrastructureError {
        fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
            match self {
                InfrastructureError::Network(e) => write!(f, "Network: {}", e),
                InfrastructureError::Storage(msg) => write!(f, "Storage: {}", msg),
            }
        }
    }

    impl Display for NetworkError {
        fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
            match self {
                NetworkError::HttpRequestFailed(msg) => write!(f, "HTTP request failed: {}", msg),
                NetworkError::UnexpectedStatus(status) => write!(f, "unexpected status: {}", status),
                NetworkError::DecodeFailed(msg) => write!(f, "failed to decode payload: {}", msg),
                NetworkError::GraphQl(msg) => write!(f, "GraphQL errors: {}", msg),
            }
        }
    }

    impl Display for PresentationError {
        fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
            match self {
                PresentationError::MountFailed(msg) => write!(f, "mount failed: {}", msg),
            }
        }
    }

    /// Error conversion utilities
    impl From<DomainError> for AppError {
        fn from(error: DomainError) -> Self {
            AppError::Domain(error)
        }
    }

    impl From<ValidationError> for AppError {
        fn from(error: ValidationError) -> Self {
            AppError::Domain(DomainError::Validation(error))
        }
    }

    impl From<ApplicationError> for AppError {
        fn from(error: ApplicationError) -> Self {
            AppError::Application(error)
        }
    }

    impl From<InfrastructureError> for AppError {
        fn from(error: InfrastructureError) -> Self {
            AppError::Infrastructure(error)
        }
    }

    impl From<NetworkError> for AppError {
        fn from(error: NetworkError) -> Self {
            AppError::Infrastructure(InfrastructureError::Network(error))
        }
    }

    impl From<PresentationError> for AppError {
        fn from(error: PresentationError) -> Self {
            AppError::Presentation(error)
        }
    }
}
