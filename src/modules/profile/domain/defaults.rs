use super::entities::Profile;

/// Fallback profile served whenever the backend is unreachable or the
/// profile row does not exist yet.
pub fn default_profile() -> Profile {
    Profile {
        name: "John Doe".to_string(),
        title: "Senior Software Engineer".to_string(),
        bio: "Experienced software engineer with a passion for building innovative solutions."
            .to_string(),
        email: "contact@example.com".to_string(),
        phone: "+1 (234) 567-890".to_string(),
        location: "San Francisco, CA".to_string(),
        github: "https://github.com".to_string(),
        linkedin: "https://linkedin.com".to_string(),
        website: "https://example.com".to_string(),
        image_url: String::new(),
    }
}
