pub const OWNER: &str = "Logan Krieger";
pub const HEADLINE: &str = "Full Stack Developer";
pub const TAGLINE: [&str; 2] = [
    "Crafting innovative digital solutions",
    "for businesses that demand quality.",
];

pub const EMAIL: &str = "logan@kriegertx.com";
pub const GITHUB_URL: &str = "https://github.com/logankrieger317";
pub const LINKEDIN_URL: &str = "https://linkedin.com/in/logankrieger";

/// Year the site was built, used for the copyright line.
pub const BUILD_YEAR: &str = env!("BUILD_YEAR");

pub fn mailto() -> String {
    format!("mailto:{EMAIL}")
}
