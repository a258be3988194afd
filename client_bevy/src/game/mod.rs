mod about;
mod core;
mod hud;
mod input;
mod interaction;
mod navigation;
mod orbit_camera;
mod point_cloud;
mod ray_effects;
mod scene;
mod target;

pub use about::AboutPlugin;
pub use core::CorePlugin;
pub(crate) use core::UpdateSet;
pub use hud::HudPlugin;
pub use input::InputPlugin;
pub use interaction::InteractionPlugin;
pub use navigation::NavigationPlugin;
pub use orbit_camera::OrbitCameraPlugin;
pub use point_cloud::PointCloudPlugin;
pub use ray_effects::RayEffectsPlugin;
pub use scene::ScenePlugin;
pub use target::TargetPlugin;
