//! Component trait shared by the server renderer and the browser client.
//!
//! A component is built from props, renders itself to an HTML fragment and
//! reacts to a single activation (a click). The server page shell and the
//! client mount function are both generic over this trait, so the same view
//! definition produces the first paint and the interactive DOM.

/// A self-contained view that can be rendered and activated.
pub trait Component {
    /// Construction input. The server serializes it into the page so the
    /// client can rebuild the identical component.
    type Props;

    /// Builds the component from its props, filling in defaults.
    fn from_props(props: Self::Props) -> Self;

    /// Returns the props that would rebuild this component in its current state.
    fn props(&self) -> Self::Props;

    /// Handles a user activation (pointer click).
    fn activate(&mut self);

    /// Renders the component to a complete HTML fragment.
    fn render(&self) -> String;
}
