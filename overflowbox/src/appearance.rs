//! Presentation state derived from options and interaction state.
//!
//! The widget draws nothing itself; hosts read an [`Appearance`] after each
//! event and style the container from it.

use crate::{config::CursorIcon, px::Px};

/// How the container should currently look.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Appearance {
    /// The native scrollbar should be hidden.
    pub hide_scroll: bool,
    /// A press or drag is in progress.
    pub is_dragging: bool,
    /// Interaction is unavailable (`disable`, or both axes frozen).
    pub disabled: bool,
    /// Cursor to show over the container.
    pub cursor: CursorIcon,
    /// Whether children should be rendered yet.
    pub children_visible: bool,
    /// Fixed container width, if any.
    pub width: Option<Px>,
    /// Fixed container height, if any.
    pub height: Option<Px>,
    /// Caller-supplied class names.
    pub class_name: String,
}

impl Appearance {
    /// Space-separated class list for DOM-like hosts.
    ///
    /// ```
    /// use overflowbox::{Appearance, CursorIcon};
    ///
    /// let appearance = Appearance {
    ///     hide_scroll: true,
    ///     is_dragging: true,
    ///     disabled: false,
    ///     cursor: CursorIcon::Grabbing,
    ///     children_visible: true,
    ///     width: None,
    ///     height: None,
    ///     class_name: "map".into(),
    /// };
    /// assert_eq!(appearance.class_list(), "wrapper hide-scroll is-dragging map");
    /// ```
    pub fn class_list(&self) -> String {
        let mut classes = vec!["wrapper"];
        if self.hide_scroll {
            classes.push("hide-scroll");
        }
        if self.is_dragging {
            classes.push("is-dragging");
        }
        if self.disabled {
            classes.push("disabled");
        }
        classes.extend(self.class_name.split_whitespace());
        classes.join(" ")
    }
}
