//! Placing floating items into a Bevy world.
//!
//! Placement validates the settings, draws the per-item tuning from the
//! shared [`ItemRng`] and spawns the item with a `Transform`. Activation
//! happens on the next `Update`. Rejected placements raise an
//! [`ItemSpawnError`] instead of spawning.

use bevy::ecs::prelude::On;
use bevy::prelude::*;
use log::{error, info};
use thiserror::Error;

use crate::config::{ItemSettings, TuningRanges};
use crate::item::FloatingItem;
use crate::plugin::{ItemRng, PluginSettings};

/// Event raised when an item could not be placed.
#[derive(Event, Debug, Clone, Error)]
#[error("{label}: {detail}")]
pub struct ItemSpawnError {
    /// Label of the rejected item.
    pub label: String,
    /// Why placement was rejected.
    pub detail: String,
}

impl ItemSpawnError {
    /// Convenience constructor used when placement fails.
    #[must_use]
    pub fn new(label: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            detail: detail.into(),
        }
    }
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "Observer systems must accept On<T> by value for Events V2."
)]
pub(crate) fn log_item_spawn_error(event: On<ItemSpawnError>) {
    let ItemSpawnError { label, detail } = event.event();
    error!("could not place {label}: {detail}");
}

/// Places one item at `position`.
///
/// The plugin's [`PluginSettings::oscillation_axis`], when set, replaces the
/// axis in `settings`. Returns the new entity, or `None` after triggering
/// [`ItemSpawnError`] when the settings or tuning ranges are invalid or the
/// plugin is missing.
pub fn spawn_item(
    world: &mut World,
    label: impl Into<String>,
    position: Vec3,
    mut settings: ItemSettings,
) -> Option<Entity> {
    let name: String = label.into();
    let (ranges, axis) = world
        .get_resource::<PluginSettings>()
        .map_or((TuningRanges::default(), None), |plugin| {
            (plugin.tuning, plugin.oscillation_axis)
        });
    if let Some(up) = axis {
        settings.oscillation_axis = up;
    }

    if let Err(e) = settings.validate().and_then(|()| ranges.validate()) {
        world.trigger(ItemSpawnError::new(name, e.to_string()));
        return None;
    }

    let Some(mut rng) = world.get_resource_mut::<ItemRng>() else {
        world.trigger(ItemSpawnError::new(
            name,
            "FloatingItemPlugin is not installed",
        ));
        return None;
    };
    let item = FloatingItem::place(name, settings, &ranges, &mut rng.0);

    info!(
        "placed {} at {position} (frequency {:.2} Hz, amplitude {:.1})",
        item.label(),
        item.tuning.frequency_hz,
        item.tuning.amplitude
    );
    Some(world.spawn((item, Transform::from_translation(position))).id())
}

/// Places `count` items in a row along X, `spacing` apart, starting at `origin`.
///
/// Items are labelled `Item_0`, `Item_1`, and so on. Returns the entities that
/// were placed.
pub fn spawn_item_row(
    world: &mut World,
    count: usize,
    origin: Vec3,
    spacing: f32,
    settings: ItemSettings,
) -> Vec<Entity> {
    let mut offset = 0.0_f32;
    let mut spawned = Vec::with_capacity(count);
    for index in 0..count {
        let position = origin + Vec3::X * offset;
        if let Some(entity) = spawn_item(world, format!("Item_{index}"), position, settings) {
            spawned.push(entity);
        }
        offset += spacing;
    }
    spawned
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plugin::FloatingItemPlugin;
    use crate::targeting::TargetMode;
    use rstest::{fixture, rstest};

    #[derive(Resource, Default)]
    struct SpawnErrors(Vec<ItemSpawnError>);

    fn record_error(event: On<ItemSpawnError>, mut errors: ResMut<SpawnErrors>) {
        errors.0.push(event.event().clone());
    }

    #[fixture]
    fn app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(FloatingItemPlugin::default());
        app.init_resource::<SpawnErrors>();
        app.add_observer(record_error);
        app
    }

    #[rstest]
    fn valid_settings_place_an_item(mut app: App) {
        let entity = spawn_item(
            app.world_mut(),
            "Item_0",
            Vec3::new(5.0, 0.0, 0.0),
            ItemSettings::default(),
        )
        .unwrap_or_else(|| panic!("item should be placed"));
        let item = app
            .world()
            .get::<FloatingItem>(entity)
            .unwrap_or_else(|| panic!("item component missing"));
        assert_eq!(item.label(), "Item_0");
        assert!(app.world().resource::<SpawnErrors>().0.is_empty());
    }

    #[rstest]
    fn invalid_settings_trigger_an_error(mut app: App) {
        let settings = ItemSettings {
            targeting: TargetMode::RandomInBox { half_extent: -1.0 },
            ..ItemSettings::default()
        };
        let placed = spawn_item(app.world_mut(), "broken", Vec3::ZERO, settings);
        assert!(placed.is_none());
        let errors = &app.world().resource::<SpawnErrors>().0;
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].label, "broken");
    }

    #[rstest]
    fn missing_plugin_is_reported() {
        let mut world = World::new();
        assert!(spawn_item(&mut world, "lonely", Vec3::ZERO, ItemSettings::default()).is_none());
    }

    #[rstest]
    fn row_is_spaced_along_x(mut app: App) {
        let entities = spawn_item_row(app.world_mut(), 3, Vec3::ZERO, 100.0, ItemSettings::default());
        assert_eq!(entities.len(), 3);
        let last = app
            .world()
            .get::<Transform>(entities[2])
            .unwrap_or_else(|| panic!("transform missing"));
        assert!((last.translation.x - 200.0).abs() < f32::EPSILON);
    }

    #[rstest]
    #[case::bevy_up(Some(Vec3::Y), Vec3::Y)]
    #[case::item_axis(None, Vec3::Z)]
    fn plugin_chooses_the_bobbing_axis(#[case] plugin_axis: Option<Vec3>, #[case] expected: Vec3) {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(FloatingItemPlugin::new(PluginSettings {
            oscillation_axis: plugin_axis,
            ..PluginSettings::default()
        }));
        let entity = spawn_item(app.world_mut(), "Item_0", Vec3::ZERO, ItemSettings::default())
            .unwrap_or_else(|| panic!("item should be placed"));
        let item = app
            .world()
            .get::<FloatingItem>(entity)
            .unwrap_or_else(|| panic!("item component missing"));
        assert_eq!(item.settings.oscillation_axis, expected);
    }
}
