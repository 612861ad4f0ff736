//! Booking platforms known to the search UI

/// Display descriptor of a booking platform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Platform {
    pub id: &'static str,
    pub name: &'static str,
    /// Logo file name under `assets/images/png/`
    pub logo: &'static str,
    /// Extra CSS class applied to the logo
    pub style_code: &'static str,
}

impl Platform {
    pub fn logo_path(&self) -> String {
        format!("assets/images/png/{}", self.logo)
    }
}

pub const PLATFORMS: &[Platform] = &[
    Platform { id: "Doctolib", name: "Doctolib", logo: "logo_doctolib.png", style_code: "_doctolib" },
    Platform { id: "Maiia", name: "Maiia", logo: "logo_maiia.png", style_code: "_maiia" },
    Platform { id: "Ordoclic", name: "Ordoclic", logo: "logo_ordoclic.png", style_code: "_ordoclic" },
    Platform { id: "Keldoc", name: "Keldoc", logo: "logo_keldoc.png", style_code: "_keldoc" },
    Platform { id: "Pandalab", name: "Pandalab", logo: "logo_pandalab.png", style_code: "_pandalab" },
    Platform { id: "Mapharma", name: "Mapharma", logo: "logo_mapharma.png", style_code: "_mapharma" },
    Platform { id: "AvecMonDoc", name: "AvecMonDoc", logo: "logo_avecmondoc.png", style_code: "_avecmondoc" },
    Platform { id: "Clikodoc", name: "Clikodoc", logo: "logo_clikodoc.png", style_code: "_clikodoc" },
    Platform { id: "mesoigner", name: "MeSoigner", logo: "logo_mesoigner.png", style_code: "_mesoigner" },
    Platform { id: "Bimedoc", name: "Bimedoc", logo: "logo_bimedoc.png", style_code: "_bimedoc" },
    Platform { id: "Valwin", name: "Valwin", logo: "logo_valwin.png", style_code: "_valwin" },
];

/// Look up a platform descriptor by its identifier
pub fn platform_for(id: &str) -> Option<&'static Platform> {
    PLATFORMS.iter().find(|platform| platform.id == id)
}
