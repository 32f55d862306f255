//! The Stroop view: one colored word that re-rolls itself on click.
//!
//! [`StroopView`] owns a [`DisplayState`] (the word and the ink color). The
//! only transition is [`StroopView::on_activate`], which replaces both fields
//! with two independent picks. Nothing forces a match or a mismatch between
//! them; the mismatch is what the Stroop test measures.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::component::Component;
use crate::constants::{DEFAULT_COLOR, DEFAULT_LABEL, HEADING_FONT_SIZE_PX};
use crate::markup;
use crate::names::NameProvider;

/// Construction input for a [`StroopView`].
///
/// This is also the wire format of the hydration data embedded in the page:
/// `{"name": "...", "color": "..."}`, both keys optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StroopProps {
    /// Initial word to display (defaults to "red").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Initial foreground color (defaults to "black").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl StroopProps {
    /// Creates props with both fields set.
    #[must_use]
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            color: Some(color.into()),
        }
    }
}

/// The (label, color) pair shown by a view.
///
/// Both fields are always non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DisplayState {
    /// The word shown.
    pub label: String,
    /// The color the word is drawn in.
    pub color: String,
}

impl DisplayState {
    /// Builds a state from props, defaulting each missing or empty field on its own.
    #[must_use]
    pub fn from_props(props: StroopProps) -> Self {
        fn non_empty(value: Option<String>, default: &str) -> String {
            value
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        }

        Self {
            label: non_empty(props.name, DEFAULT_LABEL),
            color: non_empty(props.color, DEFAULT_COLOR),
        }
    }

    /// Draws a fresh state with two independent picks from `names`.
    pub fn random_with<R: Rng + ?Sized>(names: &NameProvider, rng: &mut R) -> Self {
        Self {
            label: names.pick_with(rng).to_string(),
            color: names.pick_with(rng).to_string(),
        }
    }
}

impl Default for DisplayState {
    fn default() -> Self {
        Self::from_props(StroopProps::default())
    }
}

impl From<DisplayState> for StroopProps {
    fn from(state: DisplayState) -> Self {
        Self {
            name: Some(state.label),
            color: Some(state.color),
        }
    }
}

/// Inline style of the rendered word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadingStyle<'a> {
    /// CSS `color`, always the view's color field.
    pub color: &'a str,
    /// CSS `text-align`.
    pub text_align: &'static str,
    /// CSS `font-size` in pixels.
    pub font_size_px: u16,
    /// CSS `cursor`, signalling that the word is clickable.
    pub cursor: &'static str,
}

impl fmt::Display for HeadingStyle<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "color:{};text-align:{};font-size:{}px;cursor:{}",
            markup::css_value(self.color),
            self.text_align,
            self.font_size_px,
            self.cursor
        )
    }
}

/// Render projection of a view: the visible text and its style.
///
/// `Display` writes the projection as an `<h1>` element with the text and
/// style escaped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Heading<'a> {
    /// The only visible text, always the view's label.
    pub text: &'a str,
    /// Inline style.
    pub style: HeadingStyle<'a>,
}

impl fmt::Display for Heading<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let style = self.style.to_string();
        let result = write!(
            f,
            r#"<h1 style="{}">{}</h1>"#,
            markup::escape_attr(&style),
            markup::escape_text(self.text)
        );
        result
    }
}

/// Stateful Stroop view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StroopView {
    state: DisplayState,
    names: NameProvider,
}

impl StroopView {
    /// Creates a view from props, picking from the six color names on activation.
    #[must_use]
    pub fn new(props: StroopProps) -> Self {
        Self::with_provider(props, NameProvider::default())
    }

    /// Creates a view that picks from a custom name set on activation.
    #[must_use]
    pub fn with_provider(props: StroopProps, names: NameProvider) -> Self {
        Self {
            state: DisplayState::from_props(props),
            names,
        }
    }

    /// Returns the current state.
    #[must_use]
    pub const fn state(&self) -> &DisplayState {
        &self.state
    }

    /// Returns the word currently shown.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.state.label
    }

    /// Returns the color the word is currently drawn in.
    #[must_use]
    pub fn color(&self) -> &str {
        &self.state.color
    }

    /// Re-rolls label and color using the process-wide generator.
    pub fn on_activate(&mut self) {
        self.on_activate_with(&mut rand::thread_rng());
    }

    /// Re-rolls label and color using the given generator.
    pub fn on_activate_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.state = DisplayState::random_with(&self.names, rng);
        tracing::trace!(
            label = %self.state.label,
            color = %self.state.color,
            "stroop view activated"
        );
    }

    /// Returns the render projection of the current state.
    #[must_use]
    pub fn heading(&self) -> Heading<'_> {
        Heading {
            text: &self.state.label,
            style: HeadingStyle {
                color: &self.state.color,
                text_align: "center",
                font_size_px: HEADING_FONT_SIZE_PX,
                cursor: "pointer",
            },
        }
    }
}

impl Default for StroopView {
    fn default() -> Self {
        Self::new(StroopProps::default())
    }
}

impl fmt::Display for StroopView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.heading(), f)
    }
}

impl Component for StroopView {
    type Props = StroopProps;

    fn from_props(props: StroopProps) -> Self {
        Self::new(props)
    }

    fn props(&self) -> StroopProps {
        self.state.clone().into()
    }

    fn activate(&mut self) {
        self.on_activate();
    }

    fn render(&self) -> String {
        self.to_string()
    }
}
