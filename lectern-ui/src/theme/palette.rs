use crate::color;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Palette {
    pub general: General,
    pub text: Text,
    pub buttons: Buttons,
    pub cards: Cards,
    pub notifications: Notifications,
    pub text_inputs: TextInputs,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Text {
    pub primary: iced::Color,
    pub secondary: iced::Color,
    pub warning: iced::Color,
    pub success: iced::Color,
    pub error: iced::Color,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct General {
    pub background: iced::Color,
    pub foreground: iced::Color,
    pub backdrop: iced::Color,
    pub scrollable: iced::Color,
    pub scrollable_active: iced::Color,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Buttons {
    pub transparent: Button,
    pub primary: Button,
    pub secondary: Button,
    pub destructive: Button,
    pub link: Button,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Button {
    pub active: ButtonPalette,
    pub hovered: ButtonPalette,
    pub pressed: Option<ButtonPalette>,
    pub disabled: Option<ButtonPalette>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ButtonPalette {
    pub background: iced::Color,
    pub text: iced::Color,
    pub border: Option<iced::Color>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ContainerPalette {
    pub background: iced::Color,
    pub text: Option<iced::Color>,
    pub border: Option<iced::Color>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Cards {
    pub simple: ContainerPalette,
    pub modal: ContainerPalette,
    pub border: ContainerPalette,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Notifications {
    pub info: ContainerPalette,
    pub success: ContainerPalette,
    pub warning: ContainerPalette,
    pub error: ContainerPalette,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextInputs {
    pub primary: TextInput,
    pub invalid: TextInput,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextInput {
    pub active: TextInputPalette,
    pub disabled: TextInputPalette,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextInputPalette {
    pub background: iced::Color,
    pub icon: iced::Color,
    pub placeholder: iced::Color,
    pub value: iced::Color,
    pub selection: iced::Color,
    pub border: Option<iced::Color>,
}

impl std::default::Default for Palette {
    fn default() -> Self {
        Self {
            general: General {
                background: color::GREY_1,
                foreground: color::WHITE,
                backdrop: color::BACKDROP,
                scrollable: color::GREY_3,
                scrollable_active: color::GREY_5,
            },
            text: Text {
                primary: color::LIGHT_BLACK,
                secondary: color::GREY_5,
                warning: color::ORANGE,
                success: color::GREEN,
                error: color::RED,
            },
            buttons: Buttons {
                primary: Button {
                    active: ButtonPalette {
                        background: color::INDIGO,
                        text: color::WHITE,
                        border: color::INDIGO.into(),
                    },
                    hovered: ButtonPalette {
                        background: color::DARK_INDIGO,
                        text: color::WHITE,
                        border: color::DARK_INDIGO.into(),
                    },
                    pressed: Some(ButtonPalette {
                        background: color::DARK_INDIGO,
                        text: color::WHITE,
                        border: color::DARK_INDIGO.into(),
                    }),
                    disabled: Some(ButtonPalette {
                        background: color::LIGHT_INDIGO,
                        text: color::WHITE,
                        border: color::LIGHT_INDIGO.into(),
                    }),
                },
                secondary: Button {
                    active: ButtonPalette {
                        background: color::WHITE,
                        text: color::GREY_7,
                        border: color::GREY_2.into(),
                    },
                    hovered: ButtonPalette {
                        background: color::GREY_1,
                        text: color::GREY_7,
                        border: color::GREY_3.into(),
                    },
                    pressed: None,
                    disabled: None,
                },
                destructive: Button {
                    active: ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::RED,
                        border: None,
                    },
                    hovered: ButtonPalette {
                        background: color::LIGHT_RED,
                        text: color::RED,
                        border: None,
                    },
                    pressed: None,
                    disabled: None,
                },
                transparent: Button {
                    active: ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::GREY_7,
                        border: None,
                    },
                    hovered: ButtonPalette {
                        background: color::GREY_1,
                        text: color::GREY_7,
                        border: None,
                    },
                    pressed: None,
                    disabled: None,
                },
                link: Button {
                    active: ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::INDIGO,
                        border: None,
                    },
                    hovered: ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::DARK_INDIGO,
                        border: None,
                    },
                    pressed: None,
                    disabled: None,
                },
            },
            cards: Cards {
                simple: ContainerPalette {
                    background: color::WHITE,
                    text: None,
                    border: Some(color::GREY_2),
                },
                modal: ContainerPalette {
                    background: color::WHITE,
                    text: None,
                    border: None,
                },
                border: ContainerPalette {
                    background: color::TRANSPARENT,
                    text: None,
                    border: color::GREY_2.into(),
                },
            },
            notifications: Notifications {
                info: ContainerPalette {
                    background: color::LIGHT_INDIGO,
                    text: color::DARK_INDIGO.into(),
                    border: Some(color::INDIGO),
                },
                success: ContainerPalette {
                    background: color::LIGHT_GREEN,
                    text: color::GREEN.into(),
                    border: Some(color::GREEN),
                },
                warning: ContainerPalette {
                    background: color::WHITE,
                    text: color::ORANGE.into(),
                    border: Some(color::ORANGE),
                },
                error: ContainerPalette {
                    background: color::LIGHT_RED,
                    text: color::RED.into(),
                    border: Some(color::RED),
                },
            },
            text_inputs: TextInputs {
                primary: TextInput {
                    active: TextInputPalette {
                        background: color::WHITE,
                        icon: color::TRANSPARENT,
                        placeholder: color::GREY_3,
                        value: color::LIGHT_BLACK,
                        selection: color::LIGHT_INDIGO,
                        border: Some(color::GREY_2),
                    },
                    disabled: TextInputPalette {
                        background: color::GREY_1,
                        icon: color::TRANSPARENT,
                        placeholder: color::GREY_3,
                        value: color::GREY_5,
                        selection: color::LIGHT_INDIGO,
                        border: Some(color::GREY_2),
                    },
                },
                invalid: TextInput {
                    active: TextInputPalette {
                        background: color::WHITE,
                        icon: color::TRANSPARENT,
                        placeholder: color::GREY_3,
                        value: color::LIGHT_BLACK,
                        selection: color::LIGHT_INDIGO,
                        border: Some(color::RED),
                    },
                    disabled: TextInputPalette {
                        background: color::GREY_1,
                        icon: color::TRANSPARENT,
                        placeholder: color::GREY_3,
                        value: color::GREY_5,
                        selection: color::LIGHT_INDIGO,
                        border: Some(color::RED),
                    },
                },
            },
        }
    }
}
