//! Bevy plugin driving floating items from the ECS schedule.
//!
//! `FloatingItemPlugin` owns the shared random source, activates newly
//! spawned items and ticks every active item once per `Update`. The motion
//! core stays engine-agnostic; [`TransformHost`] is the only place that
//! touches a Bevy `Transform`.

use bevy::prelude::*;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::TuningRanges;
use crate::debug::{DebugOverlay, NoDebug};
use crate::host::ItemHost;
use crate::item::{FloatingItem, ItemMotion};
use crate::spawn::log_item_spawn_error;

/// Runtime configuration for the floating item systems.
///
/// # Examples
///
/// ```
/// use bevy::prelude::*;
/// use drift::plugin::{FloatingItemPlugin, PluginSettings};
///
/// let mut app = App::new();
/// app.add_plugins(FloatingItemPlugin::new(PluginSettings {
///     seed: Some(7),
///     ..PluginSettings::default()
/// }));
/// ```
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct PluginSettings {
    /// Seed for the shared random source. `None` seeds from entropy.
    pub seed: Option<u64>,
    /// Whether reports are posted to the [`DebugOverlay`].
    pub debug_overlay: bool,
    /// Ranges per-item tuning is drawn from when items are placed.
    pub tuning: TuningRanges,
    /// Largest frame delta handed to the motion core.
    ///
    /// Clamps frame hitches so a single long frame cannot carry an item
    /// far past its goal.
    pub max_delta_seconds: f32,
    /// Bobbing axis given to every item placed through [`spawn_item`].
    ///
    /// Defaults to Bevy's up axis (`+Y`). `None` keeps the axis from each
    /// item's own settings.
    ///
    /// [`spawn_item`]: crate::spawn::spawn_item
    pub oscillation_axis: Option<Vec3>,
}

impl Default for PluginSettings {
    fn default() -> Self {
        Self {
            seed: None,
            debug_overlay: false,
            tuning: TuningRanges::default(),
            max_delta_seconds: 0.25,
            oscillation_axis: Some(Vec3::Y),
        }
    }
}

impl PluginSettings {
    /// Frame delta after clamping to `[0, max_delta_seconds]`.
    #[must_use]
    pub fn clamp_delta(&self, delta_seconds: f32) -> f32 {
        let max = self.max_delta_seconds.max(f32::EPSILON);
        delta_seconds.clamp(0.0, max)
    }
}

/// Random source shared by every item: target generation and placement.
#[derive(Resource, Debug, Clone)]
pub struct ItemRng(pub StdRng);

impl ItemRng {
    /// Seeds deterministically when `seed` is given, otherwise from entropy.
    #[must_use]
    pub fn new(seed: Option<u64>) -> Self {
        Self(seed.map_or_else(StdRng::from_entropy, StdRng::seed_from_u64))
    }
}

/// [`ItemHost`] over a Bevy `Transform` and the current frame delta.
#[derive(Debug)]
pub struct TransformHost<'a> {
    transform: &'a mut Transform,
    delta_seconds: f32,
}

impl<'a> TransformHost<'a> {
    /// Wraps `transform` for one tick; a negative delta is treated as zero.
    pub fn new(transform: &'a mut Transform, delta_seconds: f32) -> Self {
        Self {
            transform,
            delta_seconds: delta_seconds.max(0.0),
        }
    }
}

impl ItemHost for TransformHost<'_> {
    fn position(&self) -> Vec3 {
        self.transform.translation
    }

    fn set_position(&mut self, position: Vec3) {
        self.transform.translation = position;
    }

    fn orientation(&self) -> Quat {
        self.transform.rotation
    }

    fn set_orientation(&mut self, orientation: Quat) {
        self.transform.rotation = orientation;
    }

    fn delta_seconds(&self) -> f32 {
        self.delta_seconds
    }
}

/// Activates placed items by capturing their current position as the base.
pub fn activate_items_system(
    mut commands: Commands,
    items: Query<(Entity, &FloatingItem, &Transform), Without<ItemMotion>>,
) {
    for (entity, item, transform) in &items {
        info!("{} activated at {}", item.label(), transform.translation);
        commands
            .entity(entity)
            .insert(ItemMotion::activate(transform.translation));
    }
}

/// Ticks every active item once.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy systems require parameters by value, not by reference."
)]
pub fn float_items_system(
    time: Res<Time>,
    settings: Res<PluginSettings>,
    mut item_rng: ResMut<ItemRng>,
    mut overlay: Option<ResMut<DebugOverlay>>,
    mut items: Query<(&FloatingItem, &mut ItemMotion, &mut Transform)>,
) {
    let delta = settings.clamp_delta(time.delta_secs());
    let ItemRng(rng) = &mut *item_rng;
    for (item, mut motion, mut transform) in &mut items {
        let mut host = TransformHost::new(&mut transform, delta);
        match overlay.as_deref_mut() {
            Some(board) if settings.debug_overlay => {
                motion.tick(item, &mut host, rng, board);
            }
            _ => {
                motion.tick(item, &mut host, rng, &mut NoDebug);
            }
        }
    }
}

/// Ages overlay messages by the frame delta.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy systems require parameters by value, not by reference."
)]
pub fn expire_overlay_system(time: Res<Time>, mut overlay: ResMut<DebugOverlay>) {
    overlay.expire(time.delta_secs());
}

#[cfg(feature = "render")]
fn gizmo_color(color: crate::tuning::ItemColor) -> Color {
    let [r, g, b] = color.to_unit_rgb();
    Color::srgb(r, g, b)
}

/// Draws the per-item debug primitives.
#[cfg(feature = "render")]
#[cfg_attr(docsrs, doc(cfg(feature = "render")))]
pub fn draw_debug_shapes_system(
    mut gizmos: Gizmos,
    items: Query<(&FloatingItem, &ItemMotion, &Transform)>,
) {
    use crate::debug::DebugShapes;

    for (item, motion, transform) in &items {
        let report = motion.report(item, transform.translation, transform.rotation);
        let shapes = DebugShapes::for_report(&report);
        let color = gizmo_color(shapes.color);
        gizmos
            .arrow(shapes.arrow.start, shapes.arrow.end, color)
            .with_tip_length(shapes.arrow.head_size);
        gizmos
            .sphere(
                Isometry3d::from_translation(shapes.sphere.center),
                shapes.sphere.radius,
                color,
            )
            .resolution(shapes.sphere.segments);
        let (point, size) = shapes.point;
        gizmos.cross(
            Isometry3d::from_translation(point),
            size * 0.5,
            gizmo_color(shapes.point_color),
        );
    }
}

/// Bevy plugin installing the floating item systems.
#[derive(Default)]
pub struct FloatingItemPlugin {
    settings: PluginSettings,
}

impl FloatingItemPlugin {
    /// Plugin using `settings` instead of the defaults.
    #[must_use]
    pub const fn new(settings: PluginSettings) -> Self {
        Self { settings }
    }
}

impl Plugin for FloatingItemPlugin {
    fn build(&self, app: &mut App) {
        app.add_observer(log_item_spawn_error);
        app.insert_resource(self.settings.clone());
        app.insert_resource(ItemRng::new(self.settings.seed));

        if self.settings.debug_overlay {
            app.init_resource::<DebugOverlay>();
            app.add_systems(PostUpdate, expire_overlay_system);
        }

        app.add_systems(
            Update,
            (activate_items_system, float_items_system).chain(),
        );

        #[cfg(feature = "render")]
        if self.settings.debug_overlay {
            app.add_systems(PostUpdate, draw_debug_shapes_system);
        }

        info!(
            "floating items enabled (seed: {:?}, overlay: {})",
            self.settings.seed, self.settings.debug_overlay
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn plugin_initialises_resources() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(FloatingItemPlugin::default());
        assert!(app.world().contains_resource::<ItemRng>());
        assert!(app.world().contains_resource::<PluginSettings>());
        assert!(!app.world().contains_resource::<DebugOverlay>());
    }

    #[rstest]
    fn overlay_is_installed_on_request() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(FloatingItemPlugin::new(PluginSettings {
            debug_overlay: true,
            ..PluginSettings::default()
        }));
        assert!(app.world().contains_resource::<DebugOverlay>());
    }

    #[rstest]
    #[case::negative(-0.5, 0.0)]
    #[case::within(0.1, 0.1)]
    #[case::hitch(3.0, 0.25)]
    fn delta_is_clamped(#[case] raw: f32, #[case] expected: f32) {
        let settings = PluginSettings::default();
        assert!((settings.clamp_delta(raw) - expected).abs() < f32::EPSILON);
    }

    #[rstest]
    fn transform_host_applies_world_deltas() {
        let mut transform = Transform::from_xyz(1.0, 2.0, 3.0);
        let mut host = TransformHost::new(&mut transform, -1.0);
        host.apply_position_delta(Vec3::X);
        assert!(host.delta_seconds().abs() < f32::EPSILON);
        assert_eq!(transform.translation, Vec3::new(2.0, 2.0, 3.0));
    }

    #[rstest]
    fn seeded_sources_agree() {
        use rand::Rng;

        let mut a = ItemRng::new(Some(3));
        let mut b = ItemRng::new(Some(3));
        let x: u64 = a.0.gen();
        let y: u64 = b.0.gen();
        assert_eq!(x, y);
    }
}
