use crate::color;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Palette {
    pub general: General,
    pub text: Text,
    pub buttons: Buttons,
    pub cards: Cards,
    pub banners: Banners,
    pub pills: Pills,
    pub notifications: Notifications,
    pub text_inputs: TextInputs,
    pub checkboxes: Checkboxes,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct General {
    pub background: iced::Color,
    pub foreground: iced::Color,
    pub scrollable: iced::Color,
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
pub struct Buttons {
    pub primary: Button,
    pub secondary: Button,
    pub transparent: Button,
    pub container_border: Button,
    pub menu: Button,
    pub link: Button,
    pub chip: Button,
    pub chip_active: Button,
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
    pub invalid: ContainerPalette,
    pub warning: ContainerPalette,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Banners {
    pub warning: ContainerPalette,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Pills {
    pub simple: ContainerPalette,
    pub primary: ContainerPalette,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Notifications {
    pub pending: ContainerPalette,
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

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Checkboxes {
    pub icon: iced::Color,
    pub text: iced::Color,
    pub background: iced::Color,
    pub border: Option<iced::Color>,
}

impl std::default::Default for Palette {
    fn default() -> Self {
        Self {
            general: General {
                background: color::CREAM,
                foreground: color::INK,
                scrollable: color::GREY_2,
            },
            text: Text {
                primary: color::INK,
                secondary: color::GREY_3,
                warning: color::AMBER,
                success: color::GREEN,
                error: color::RED,
            },
            buttons: Buttons {
                primary: Button {
                    active: ButtonPalette {
                        background: color::LIME,
                        text: color::INK,
                        border: None,
                    },
                    hovered: ButtonPalette {
                        background: color::LIME_SOFT,
                        text: color::INK,
                        border: None,
                    },
                    pressed: Some(ButtonPalette {
                        background: color::LIME_SOFT,
                        text: color::INK,
                        border: None,
                    }),
                    disabled: Some(ButtonPalette {
                        background: color::GREY_1,
                        text: color::GREY_4,
                        border: None,
                    }),
                },
                secondary: Button {
                    active: ButtonPalette {
                        background: color::WHITE,
                        text: color::INK,
                        border: color::GREY_2.into(),
                    },
                    hovered: ButtonPalette {
                        background: color::GREY_1,
                        text: color::INK,
                        border: color::GREY_2.into(),
                    },
                    pressed: Some(ButtonPalette {
                        background: color::GREY_1,
                        text: color::INK,
                        border: color::GREY_2.into(),
                    }),
                    disabled: Some(ButtonPalette {
                        background: color::WHITE,
                        text: color::GREY_3,
                        border: color::GREY_1.into(),
                    }),
                },
                transparent: Button {
                    active: ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::INK,
                        border: None,
                    },
                    hovered: ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::GREY_4,
                        border: None,
                    },
                    pressed: None,
                    disabled: None,
                },
                container_border: Button {
                    active: ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::INK,
                        border: color::GREY_2.into(),
                    },
                    hovered: ButtonPalette {
                        background: color::GREY_1,
                        text: color::INK,
                        border: color::GREY_2.into(),
                    },
                    pressed: None,
                    disabled: None,
                },
                menu: Button {
                    active: ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::GREY_3,
                        border: None,
                    },
                    hovered: ButtonPalette {
                        background: color::INK_LIGHT,
                        text: color::WHITE,
                        border: None,
                    },
                    pressed: Some(ButtonPalette {
                        background: color::INK_LIGHT,
                        text: color::LIME,
                        border: None,
                    }),
                    disabled: None,
                },
                link: Button {
                    active: ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::GREEN,
                        border: None,
                    },
                    hovered: ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::INK,
                        border: None,
                    },
                    pressed: None,
                    disabled: Some(ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::GREY_3,
                        border: None,
                    }),
                },
                chip: Button {
                    active: ButtonPalette {
                        background: color::GREY_1,
                        text: color::INK,
                        border: None,
                    },
                    hovered: ButtonPalette {
                        background: color::GREY_2,
                        text: color::INK,
                        border: None,
                    },
                    pressed: None,
                    disabled: None,
                },
                chip_active: Button {
                    active: ButtonPalette {
                        background: color::INK,
                        text: color::WHITE,
                        border: None,
                    },
                    hovered: ButtonPalette {
                        background: color::INK,
                        text: color::WHITE,
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
                    border: None,
                },
                modal: ContainerPalette {
                    background: color::WHITE,
                    text: None,
                    border: None,
                },
                invalid: ContainerPalette {
                    background: color::WHITE,
                    text: Some(color::RED),
                    border: Some(color::RED),
                },
                warning: ContainerPalette {
                    background: color::WHITE,
                    text: Some(color::RED),
                    border: Some(color::RED),
                },
            },
            banners: Banners {
                warning: ContainerPalette {
                    background: color::AMBER,
                    text: Some(color::INK),
                    border: None,
                },
            },
            pills: Pills {
                simple: ContainerPalette {
                    background: color::MINT,
                    text: Some(color::INK),
                    border: None,
                },
                primary: ContainerPalette {
                    background: color::INK,
                    text: Some(color::WHITE),
                    border: None,
                },
            },
            notifications: Notifications {
                pending: ContainerPalette {
                    background: color::MINT,
                    text: Some(color::INK),
                    border: None,
                },
                error: ContainerPalette {
                    background: color::WHITE,
                    text: Some(color::RED),
                    border: Some(color::RED),
                },
            },
            text_inputs: TextInputs {
                primary: TextInput {
                    active: TextInputPalette {
                        background: color::WHITE,
                        icon: color::GREY_4,
                        placeholder: color::GREY_3,
                        value: color::INK,
                        selection: color::LIME_SOFT,
                        border: Some(color::GREY_2),
                    },
                    disabled: TextInputPalette {
                        background: color::GREY_1,
                        icon: color::GREY_3,
                        placeholder: color::GREY_3,
                        value: color::GREY_4,
                        selection: color::LIME_SOFT,
                        border: Some(color::GREY_1),
                    },
                },
                invalid: TextInput {
                    active: TextInputPalette {
                        background: color::WHITE,
                        icon: color::GREY_4,
                        placeholder: color::GREY_3,
                        value: color::INK,
                        selection: color::LIME_SOFT,
                        border: Some(color::RED),
                    },
                    disabled: TextInputPalette {
                        background: color::GREY_1,
                        icon: color::GREY_3,
                        placeholder: color::GREY_3,
                        value: color::GREY_4,
                        selection: color::LIME_SOFT,
                        border: Some(color::RED),
                    },
                },
            },
            checkboxes: Checkboxes {
                icon: color::INK,
                text: color::INK,
                background: color::WHITE,
                border: Some(color::GREY_2),
            },
        }
    }
}
