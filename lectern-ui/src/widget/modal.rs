use iced::widget::{center, mouse_area, opaque};

use crate::theme;

use super::{Element, Stack};

/// Overlays `modal` on top of `base`, dimming and blocking the content below.
pub struct Modal<'a, Message> {
    base: Element<'a, Message>,
    modal: Element<'a, Message>,
    on_blur: Option<Message>,
}

impl<'a, Message: Clone + 'a> Modal<'a, Message> {
    pub fn new(
        base: impl Into<Element<'a, Message>>,
        modal: impl Into<Element<'a, Message>>,
    ) -> Self {
        Self {
            base: base.into(),
            modal: modal.into(),
            on_blur: None,
        }
    }

    /// Message emitted when the backdrop is clicked.
    pub fn on_blur(mut self, on_blur: Option<Message>) -> Self {
        self.on_blur = on_blur;
        self
    }
}

impl<'a, Message: Clone + 'a> From<Modal<'a, Message>> for Element<'a, Message> {
    fn from(modal: Modal<'a, Message>) -> Element<'a, Message> {
        let backdrop = center(opaque(modal.modal)).style(theme::container::backdrop);
        let layer: Element<'a, Message> = match modal.on_blur {
            Some(message) => mouse_area(backdrop).on_press(message).into(),
            None => backdrop.into(),
        };
        Stack::new().push(modal.base).push(opaque(layer)).into()
    }
}
