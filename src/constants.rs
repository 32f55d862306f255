//! Application-wide constants.
//!
//! This module defines constants shared by the server page shell and the
//! browser client, including the DOM ids both sides agree on.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "Stroop";

/// The binary name of the application (used in command examples, lowercase with hyphens).
pub const APP_BINARY_NAME: &str = "stroop";

/// Id of the element the view is rendered into.
pub const ROOT_ELEMENT_ID: &str = "app";

/// Id of the `<script type="application/json">` element carrying the initial view state.
pub const DATA_ELEMENT_ID: &str = "stroop-data";

/// Label shown when no initial label is supplied.
pub const DEFAULT_LABEL: &str = "red";

/// Foreground color used when no initial color is supplied.
pub const DEFAULT_COLOR: &str = "black";

/// Font size of the rendered word, in CSS pixels.
pub const HEADING_FONT_SIZE_PX: u16 = 300;
