//! Render description of an appointment card
//!
//! Everything the card displays is derived here from the location record,
//! its booking action and the display properties. The UI layer only turns a
//! [`CardView`] into DOM nodes and wires the events it names.

use std::str::FromStr;

use crate::booking::{classify, BookingAction};
use crate::config::UiConfig;
use crate::format;
use crate::location::{Location, LocationWithDistance};
use crate::platform::platform_for;
use crate::{Error, Result};

pub const CHRONODOSE_LABEL: &str = "Chronodoses disponibles";
pub const CHRONODOSE_TOOLTIP: &str =
    "Les chronodoses sont des doses de vaccin réservables à court terme sans critères d'éligibilité";

/// Visual theme of the search page hosting the card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Standard,
    Chronodose,
}

impl Theme {
    pub fn css_class(&self) -> &'static str {
        match self {
            Theme::Standard => "search-standard",
            Theme::Chronodose => "search-chronodose",
        }
    }
}

impl FromStr for Theme {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "standard" => Ok(Theme::Standard),
            "chronodose" => Ok(Theme::Chronodose),
            other => Err(Error::UnknownTheme(other.to_string())),
        }
    }
}

/// Notification emitted when the user acts on a card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardEvent {
    BookingInitiated,
    VerificationInitiated,
}

impl CardEvent {
    /// DOM event name
    pub fn name(&self) -> &'static str {
        match self {
            CardEvent::BookingInitiated => "prise-rdv-cliquee",
            CardEvent::VerificationInitiated => "verification-rdv-cliquee",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonStyle {
    Primary,
    Info,
}

impl ButtonStyle {
    pub fn class(&self) -> &'static str {
        match self {
            ButtonStyle::Primary => "btn-primary",
            ButtonStyle::Info => "btn-info",
        }
    }
}

/// What wraps the whole card
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardLink {
    /// `href="#"` link whose click emits the event instead of navigating
    Emit(CardEvent),
    /// Plain `tel:` link
    Phone { href: String },
    None,
}

/// Platform shown next to the slot count
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlatformBadge {
    Logo { src: String, alt: String, style_code: &'static str },
    Name(String),
    None,
}

/// Call-to-action block on the right of the card
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardAction {
    Platform {
        label: &'static str,
        style: ButtonStyle,
        slot_count: String,
        badge: PlatformBadge,
    },
    Phone {
        href: String,
        label: String,
    },
}

/// Variant-dependent display settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardConfig {
    pub highlighted: bool,
    pub clickable: bool,
    pub disabled_bg: bool,
    pub missing_date_label: &'static str,
    pub link: CardLink,
    pub action: Option<CardAction>,
}

impl CardConfig {
    pub fn new(action: BookingAction, location: &Location, highlightable: bool, config: &UiConfig) -> Self {
        match action {
            BookingAction::ActiveViaPlatform | BookingAction::InactiveViaPlatform => {
                let (disabled_bg, missing_date_label, label, style, event) = match action {
                    BookingAction::InactiveViaPlatform => (
                        true,
                        "Aucun rendez-vous",
                        "Vérifier le centre de vaccination",
                        ButtonStyle::Info,
                        CardEvent::VerificationInitiated,
                    ),
                    _ => (
                        false,
                        "Date inconnue",
                        "Prendre rendez-vous",
                        ButtonStyle::Primary,
                        CardEvent::BookingInitiated,
                    ),
                };

                CardConfig {
                    highlighted: highlightable && !disabled_bg,
                    clickable: true,
                    disabled_bg,
                    missing_date_label,
                    link: CardLink::Emit(event),
                    action: Some(CardAction::Platform {
                        label,
                        style,
                        slot_count: format::format_slot_count(location.appointment_count),
                        badge: platform_badge(location, config),
                    }),
                }
            }
            BookingAction::ActiveViaPhone => {
                let phone = location.phone_number().unwrap_or_default();
                let href = tel_href(phone);
                CardConfig {
                    highlighted: false,
                    clickable: true,
                    disabled_bg: false,
                    missing_date_label: "Réservation tél uniquement",
                    link: CardLink::Phone { href: href.clone() },
                    action: Some(CardAction::Phone {
                        href,
                        label: format!("Appeler le {}", format::normalize_phone_number(phone)),
                    }),
                }
            }
            BookingAction::Inactive => CardConfig {
                highlighted: false,
                clickable: false,
                disabled_bg: true,
                missing_date_label: "Aucun rendez-vous",
                link: CardLink::None,
                action: None,
            },
        }
    }
}

fn platform_badge(location: &Location, config: &UiConfig) -> PlatformBadge {
    if location.platform.is_empty() {
        return PlatformBadge::None;
    }
    match platform_for(&location.platform) {
        Some(platform) => PlatformBadge::Logo {
            src: format::asset_url(&config.base_path, &platform.logo_path()),
            alt: format!("Créneau de vaccination {}", platform.name),
            style_code: platform.style_code,
        },
        None => {
            tracing::debug!(platform = %location.platform, "no descriptor for platform");
            PlatformBadge::Name(location.platform.clone())
        }
    }
}

fn tel_href(phone: &str) -> String {
    format!("tel:{}", phone)
}

/// Phone number row of the metadata block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneLink {
    pub href: String,
    pub display: String,
}

/// Everything needed to render one card
#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    pub action: BookingAction,
    pub config: CardConfig,
    pub classes: String,
    /// `title` attribute of the card, the location url when clickable
    pub title: String,
    pub heading: String,
    /// "- 4.5 km"
    pub distance: Option<String>,
    pub name: String,
    pub address: String,
    pub phone: Option<PhoneLink>,
    pub location_type: String,
    pub vaccine_type: Option<String>,
}

impl CardView {
    /// Build the view of a location, classifying it first
    pub fn for_location(
        lieu: &LocationWithDistance,
        theme: Theme,
        highlightable: bool,
        config: &UiConfig,
    ) -> Self {
        Self::build(lieu, classify(&lieu.location), theme, highlightable, config)
    }

    pub fn build(
        lieu: &LocationWithDistance,
        action: BookingAction,
        theme: Theme,
        highlightable: bool,
        config: &UiConfig,
    ) -> Self {
        let location = &lieu.location;
        let card = CardConfig::new(action, location, highlightable, config);

        let heading = match location.next_appointment.as_deref() {
            Some(iso) => format::format_fr_datetime(iso).unwrap_or_else(|err| {
                tracing::warn!(location = %location.internal_id, %err, "displaying raw appointment date");
                iso.to_string()
            }),
            None => card.missing_date_label.to_string(),
        };

        CardView {
            action,
            classes: card_classes(&card, theme),
            title: if card.clickable { location.url.clone() } else { String::new() },
            heading,
            distance: format::format_distance(lieu.distance).map(|d| format!("- {} km", d)),
            name: location.name.clone(),
            address: location.metadata.address.clone(),
            phone: location.phone_number().map(|phone| PhoneLink {
                href: tel_href(phone),
                display: format::normalize_phone_number(phone),
            }),
            location_type: location.location_type.label().to_string(),
            vaccine_type: location.vaccine_type().map(str::to_string),
            config: card,
        }
    }

    pub fn highlighted(&self) -> bool {
        self.config.highlighted
    }

    /// Tooltip of the chronodose label, when the label is rendered
    pub fn tooltip_text(&self) -> Option<&'static str> {
        self.highlighted().then_some(CHRONODOSE_TOOLTIP)
    }

    /// Event emitted when the card itself is clicked
    pub fn click_event(&self) -> Option<CardEvent> {
        match self.config.link {
            CardLink::Emit(event) => Some(event),
            _ => None,
        }
    }
}

/// Card elements with a click handler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// Phone number in the metadata block
    PhoneLink,
    /// Call-to-action button
    ActionButton,
    /// Link wrapping the whole card
    CardLink,
}

impl ClickTarget {
    /// Elements a click on `self` bubbles through, innermost first
    fn bubbling_path(self) -> &'static [ClickTarget] {
        match self {
            ClickTarget::PhoneLink => &[ClickTarget::PhoneLink, ClickTarget::CardLink],
            ClickTarget::ActionButton => &[ClickTarget::ActionButton, ClickTarget::CardLink],
            ClickTarget::CardLink => &[ClickTarget::CardLink],
        }
    }
}

/// What a click handler does with the event it receives
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClickHandler {
    pub prevent_default: bool,
    pub stop_propagation: bool,
    pub emit: Option<CardEvent>,
}

/// Effect of a click once it has bubbled through the card
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClickOutcome {
    pub events: Vec<CardEvent>,
    /// Link followed by the browser, `None` when prevented or absent
    pub navigation: Option<String>,
}

impl CardView {
    /// Handler attached to `target`, if the element has one
    pub fn click_handler(&self, target: ClickTarget) -> Option<ClickHandler> {
        match target {
            ClickTarget::PhoneLink => self.phone.as_ref().map(|_| ClickHandler {
                stop_propagation: true,
                ..ClickHandler::default()
            }),
            ClickTarget::ActionButton => match self.config.action {
                Some(CardAction::Platform { .. }) => Some(ClickHandler {
                    prevent_default: true,
                    ..ClickHandler::default()
                }),
                _ => None,
            },
            ClickTarget::CardLink => self.click_event().map(|event| ClickHandler {
                prevent_default: true,
                stop_propagation: false,
                emit: Some(event),
            }),
        }
    }

    fn href(&self, target: ClickTarget) -> Option<String> {
        match target {
            ClickTarget::PhoneLink => self.phone.as_ref().map(|phone| phone.href.clone()),
            ClickTarget::ActionButton => match &self.config.action {
                Some(CardAction::Platform { .. }) => Some("#".to_string()),
                Some(CardAction::Phone { href, .. }) => Some(href.clone()),
                None => None,
            },
            ClickTarget::CardLink => match &self.config.link {
                CardLink::Emit(_) => Some("#".to_string()),
                CardLink::Phone { href } => Some(href.clone()),
                CardLink::None => None,
            },
        }
    }

    /// Run the handlers a click on `target` reaches, the way the DOM
    /// dispatches it
    pub fn resolve_click(&self, target: ClickTarget) -> ClickOutcome {
        let Some(href) = self.href(target) else {
            return ClickOutcome::default();
        };

        let mut outcome = ClickOutcome::default();
        let mut prevented = false;
        for step in target.bubbling_path() {
            let Some(handler) = self.click_handler(*step) else {
                continue;
            };
            prevented |= handler.prevent_default;
            outcome.events.extend(handler.emit);
            if handler.stop_propagation {
                break;
            }
        }

        if !prevented {
            outcome.navigation = Some(href);
        }
        outcome
    }
}

fn card_classes(card: &CardConfig, theme: Theme) -> String {
    let mut classes = vec!["card", "rounded-3", "mb-5"];
    if card.highlighted {
        classes.push("highlighted");
    }
    if card.clickable {
        classes.push("clickable");
    }
    if card.disabled_bg {
        classes.push("bg-disabled");
    }
    classes.push(theme.css_class());
    classes.join(" ")
}
