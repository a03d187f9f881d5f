/// Default repository key when `JFROG_REPO_NAME` is unset
pub const DEFAULT_REPO_NAME: &str = "docker-local";

/// Default image when `DOCKER_IMAGE_NAME` is unset
pub const DEFAULT_IMAGE_NAME: &str = "alpine";

/// Default tag when `DOCKER_IMAGE_TAG` is unset
pub const DEFAULT_IMAGE_TAG: &str = "3.9";

/// Domain suffix of JFrog SaaS platforms
const PLATFORM_DOMAIN: &str = "jfrog.io";

/// Where the scenario points: platform, repository and image.
///
/// Resolved once at startup and shared read-only by every simulated user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetCoordinates {
    platform_id: String,
    repo_name: String,
    image_name: String,
    image_tag: String,
}

impl TargetCoordinates {
    pub fn new(
        platform_id: impl Into<String>,
        repo_name: impl Into<String>,
        image_name: impl Into<String>,
        image_tag: impl Into<String>,
    ) -> Self {
        Self {
            platform_id: platform_id.into(),
            repo_name: repo_name.into(),
            image_name: image_name.into(),
            image_tag: image_tag.into(),
        }
    }

    /// Target with the default repository and image for a platform
    pub fn with_defaults(platform_id: impl Into<String>) -> Self {
        Self::new(
            platform_id,
            DEFAULT_REPO_NAME,
            DEFAULT_IMAGE_NAME,
            DEFAULT_IMAGE_TAG,
        )
    }

    pub fn platform_id(&self) -> &str {
        &self.platform_id
    }

    pub fn repo_name(&self) -> &str {
        &self.repo_name
    }

    pub fn image_name(&self) -> &str {
        &self.image_name
    }

    pub fn image_tag(&self) -> &str {
        &self.image_tag
    }

    /// Container registry host, e.g. `acme.jfrog.io`
    pub fn registry_host(&self) -> String {
        format!("{}.{}", self.platform_id, PLATFORM_DOMAIN)
    }

    /// REST base URL, e.g. `https://acme.jfrog.io`
    pub fn base_url(&self) -> String {
        format!("https://{}", self.registry_host())
    }

    /// Public image reference pulled before the push, e.g. `alpine:3.9`
    pub fn source_image(&self) -> String {
        format!("{}:{}", self.image_name, self.image_tag)
    }

    /// Image reference inside the platform registry
    pub fn target_image(&self) -> String {
        format!(
            "{}/{}/{}:{}",
            self.registry_host(),
            self.repo_name,
            self.image_name,
            self.image_tag
        )
    }

    /// Repository-relative path of the pushed image manifest
    pub fn manifest_path(&self) -> String {
        format!("{}/{}/manifest.json", self.image_name, self.image_tag)
    }
}
