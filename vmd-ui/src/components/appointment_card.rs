//! Appointment card of a vaccination location
//!
//! Renders one of the booking variants computed by [`CardView`] and fires
//! `prise-rdv-cliquee` / `verification-rdv-cliquee` from its root element.
//! Click handlers are the ones [`CardView::click_handler`] describes.

use leptos::ev::MouseEvent;
use leptos::*;
use vmd_common::card::{CardAction, PlatformBadge, CHRONODOSE_LABEL, CHRONODOSE_TOOLTIP};
use vmd_common::{
    BookingAction, CardEvent, CardLink, CardView, ClickHandler, ClickTarget, LocationWithDistance,
    Theme,
};

use super::appointment_metadata::{AppointmentMetadata, MetadataWidth};
use crate::context::use_ui_config;
use crate::events::dispatch_card_event;
use crate::tooltip::{attach_title_tooltip, TooltipBinding, TooltipHandle};

#[component]
pub fn AppointmentCard(
    /// Location shown by the card
    #[prop(into)]
    lieu: Signal<LocationWithDistance>,
    #[prop(into, default = Theme::Standard.into())]
    theme: MaybeSignal<Theme>,
    /// Whether the card may show the chronodose banner
    #[prop(into, default = false.into())]
    highlightable: MaybeSignal<bool>,
    /// Classification computed by the host; the card classifies the location
    /// itself when absent
    #[prop(into, default = None.into())]
    action: MaybeSignal<Option<BookingAction>>,
    /// Called with the location after `prise-rdv-cliquee` is dispatched
    #[prop(optional)]
    on_booking: Option<Callback<LocationWithDistance>>,
    /// Called with the location after `verification-rdv-cliquee` is dispatched
    #[prop(optional)]
    on_verification: Option<Callback<LocationWithDistance>>,
) -> impl IntoView {
    let config = use_ui_config();
    let tooltips_enabled = config.tooltips;
    let root_ref = create_node_ref::<html::Div>();
    let label_ref = create_node_ref::<html::Span>();
    let tooltip = store_value(TooltipBinding::<TooltipHandle>::default());

    let card = create_memo(move |_| {
        let lieu = lieu.get();
        match action.get() {
            Some(action) => CardView::build(&lieu, action, theme.get(), highlightable.get(), &config),
            None => CardView::for_location(&lieu, theme.get(), highlightable.get(), &config),
        }
    });

    let emit = Callback::new(move |event: CardEvent| {
        let lieu = lieu.get_untracked();
        if let Some(root) = root_ref.get_untracked() {
            if let Err(e) = dispatch_card_event(&root, event, &lieu) {
                logging::warn!("Failed to dispatch {}: {:?}", event.name(), e);
            }
        }
        let callback = match event {
            CardEvent::BookingInitiated => on_booking,
            CardEvent::VerificationInitiated => on_verification,
        };
        if let Some(callback) = callback {
            callback.call(lieu);
        }
    });

    // Rebind the tooltip once the label of the latest render is in the DOM
    create_effect(move |_| {
        let wanted = tooltips_enabled && card.with(|card| card.tooltip_text().is_some());
        let mounted = label_ref.get().is_some();

        request_animation_frame(move || {
            let label = label_ref.get_untracked().filter(|_| wanted && mounted);
            tooltip.update_value(|binding| match label {
                Some(label) => {
                    if let Err(e) = binding.rebind(|| attach_title_tooltip(&label)) {
                        logging::warn!("Tooltip not attached: {:?}", e);
                    }
                }
                None => binding.clear(),
            });
        });
    });

    view! {
        <div class="vmd-appointment-card" node_ref=root_ref>
            {move || {
                let card = card.get();
                let link = card.config.link.clone();
                let on_card_click = handle_click(card.click_handler(ClickTarget::CardLink), emit);
                let body = card_body(card, label_ref, emit);
                match link {
                    CardLink::Emit(_) => view! {
                        <a href="#" on:click=on_card_click>{body}</a>
                    }
                    .into_view(),
                    CardLink::Phone { href } => view! { <a href=href>{body}</a> }.into_view(),
                    CardLink::None => body,
                }
            }}
        </div>
    }
}

/// DOM side of a [`ClickHandler`]; elements without one get a no-op
fn handle_click(handler: Option<ClickHandler>, emit: Callback<CardEvent>) -> impl Fn(MouseEvent) + Copy {
    let handler = handler.unwrap_or_default();
    move |ev: MouseEvent| {
        if handler.prevent_default {
            ev.prevent_default();
        }
        if handler.stop_propagation {
            ev.stop_immediate_propagation();
        }
        if let Some(event) = handler.emit {
            emit.call(event);
        }
    }
}

fn card_body(card: CardView, label_ref: NodeRef<html::Span>, emit: Callback<CardEvent>) -> View {
    let highlighted = card.highlighted();
    let on_phone_click = handle_click(card.click_handler(ClickTarget::PhoneLink), emit);
    let on_action_click = handle_click(card.click_handler(ClickTarget::ActionButton), emit);
    let CardView {
        config,
        classes,
        title,
        heading,
        distance,
        name,
        address,
        phone,
        location_type,
        vaccine_type,
        ..
    } = card;

    view! {
        <div class=classes title=title>
            {highlighted.then(|| view! {
                <div class="row align-items-center highlight-text">
                    <span id="chronodose-label" node_ref=label_ref title=CHRONODOSE_TOOLTIP>
                        <i class="bi vmdicon-lightning-charge-fill"></i>
                        {CHRONODOSE_LABEL}
                        <i class="bi vmdicon-lightning-charge-fill"></i>
                    </span>
                </div>
            })}
            <div class="card-body p-4">
                <div class="row align-items-center">
                    <div class="col">
                        <h5 class="card-title">
                            {heading}
                            " "
                            <small class="distance">{distance.unwrap_or_default()}</small>
                        </h5>
                        <div class="row">
                            <AppointmentMetadata
                                extra_class="mb-2"
                                width=MetadataWidth::FullWidth
                                icon="vmdicon-geo-alt-fill"
                                label="Adresse"
                            >
                                <div>
                                    <span class="fw-bold text-dark">{name}</span>
                                    <br/>
                                    <em>{address}</em>
                                </div>
                            </AppointmentMetadata>
                            {phone.map(|phone| view! {
                                <AppointmentMetadata extra_class="mb-2" icon="vmdicon-telephone-fill" label="Téléphone">
                                    <span>
                                        <a href=phone.href on:click=on_phone_click>
                                            {phone.display}
                                        </a>
                                    </span>
                                </AppointmentMetadata>
                            })}
                            <AppointmentMetadata extra_class="mb-2" icon="vmdicon-commerical-building" label="Lieux">
                                <span>{location_type}</span>
                            </AppointmentMetadata>
                            {vaccine_type.map(|vaccine| view! {
                                <AppointmentMetadata extra_class="mb-2" icon="vmdicon-syringe" label="Vaccin administré">
                                    <span>{vaccine}</span>
                                </AppointmentMetadata>
                            })}
                        </div>
                    </div>
                    {config.action.map(|action| view! {
                        <div class="col-24 col-md-auto text-center mt-4 mt-md-0">
                            {action_view(action, on_action_click)}
                        </div>
                    })}
                </div>
            </div>
        </div>
    }
    .into_view()
}

fn action_view(action: CardAction, on_click: impl Fn(MouseEvent) + 'static) -> View {
    match action {
        CardAction::Platform { label, style, slot_count, badge } => view! {
            <a href="#" class=format!("btn btn-lg {}", style.class()) on:click=on_click>
                {label}
            </a>
            <div class="row align-items-center justify-content-center mt-3 text-black-50">
                <div class="col-auto">{slot_count}</div>
                {badge_view(badge)}
            </div>
        }
        .into_view(),
        CardAction::Phone { href, label } => view! {
            <a href=href class="btn btn-tel btn-lg" on:click=on_click>{label}</a>
        }
        .into_view(),
    }
}

fn badge_view(badge: PlatformBadge) -> View {
    match badge {
        PlatformBadge::Logo { src, alt, style_code } => view! {
            "|"
            <div class="col-auto">
                <img class=format!("rdvPlatformLogo {}", style_code) src=src alt=alt/>
            </div>
        }
        .into_view(),
        PlatformBadge::Name(name) => view! {
            "|"
            <div class="col-auto">{name}</div>
        }
        .into_view(),
        PlatformBadge::None => ().into_view(),
    }
}
