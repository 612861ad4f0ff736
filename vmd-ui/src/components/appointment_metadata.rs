use leptos::*;

/// How much horizontal room a metadata row takes
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MetadataWidth {
    FullWidth,
    #[default]
    FitToContent,
}

impl MetadataWidth {
    pub fn class(&self) -> &'static str {
        match self {
            MetadataWidth::FullWidth => "col-24",
            MetadataWidth::FitToContent => "col-auto",
        }
    }
}

/// One labelled row of the card's metadata block
#[component]
pub fn AppointmentMetadata(
    /// Icon font class
    icon: &'static str,
    /// Accessible label of the icon
    label: &'static str,
    #[prop(optional)]
    width: MetadataWidth,
    #[prop(optional)]
    extra_class: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=format!("appointment-metadata {} {}", width.class(), extra_class)>
            <div class="d-flex">
                <i class=format!("bi {} me-2 fs-6 text-success", icon) aria-label=label title=label></i>
                <div class="metadata-content">{children()}</div>
            </div>
        </div>
    }
}
