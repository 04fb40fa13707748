//! Static copy of the landing page.

/// Anchor of the upload shell; the hero call-to-action scrolls here.
pub const UPLOAD_ANCHOR: &str = "upload";

pub struct Hero {
    pub badge: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub cta_label: &'static str,
    pub cta_target: &'static str,
}

pub const HERO: Hero = Hero {
    badge: "Introducing Roomify",
    title: "Build beautiful spaces at the speed of thought",
    subtitle: "Roomify turns 2D floor plans into photorealistic top-down renders \
               so you can see a home before a single wall goes up.",
    cta_label: "Start Building",
    cta_target: UPLOAD_ANCHOR,
};

pub struct UploadShell {
    pub anchor: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
}

pub const UPLOAD_SHELL: UploadShell = UploadShell {
    anchor: UPLOAD_ANCHOR,
    title: "Upload your floor plan",
    subtitle: "JPG, PNG or WEBP. We'll take it from there.",
};

pub const PROJECTS_TITLE: &str = "Community Projects";
pub const PROJECTS_SUBTITLE: &str = "Explore what others have built with Roomify.";

pub const FOOTER_LINK: &str = "https://roomify.app";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hero_call_to_action_targets_upload_shell() {
        assert_eq!(HERO.cta_target, UPLOAD_SHELL.anchor);
    }
}
