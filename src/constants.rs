//! Application-wide constants.
//!
//! Names shared by the CLI, the config layer and the class renderer.

/// The binary name of the application (used in command examples).
pub const APP_BINARY_NAME: &str = "topic-cards";

/// Directory name under the platform config directory.
pub const CONFIG_DIR_NAME: &str = "TopicCards";

/// Environment variable that overrides the config directory.
pub const CONFIG_DIR_ENV: &str = "TOPIC_CARDS_CONFIG_DIR";

/// Base class of the card list container.
pub const CONTAINER_CLASS: &str = "topic-cards-list";

/// Base class of every card.
pub const CARD_CLASS: &str = "topic-card";
