//! End-to-end lifecycle stories driven through a recording backend.

use anyhow::Result;

use stagger_core::motion::backend::{BackendCall, RecordingBackend};
use stagger_core::motion::config::GroupConfig;
use stagger_core::motion::phase::Phase;
use stagger_core::motion::preset::{MotionProperty, ValuePair};
use stagger_core::{ChildPhase, GroupEvent, KeyedChild, StaggerGroup};

fn items(keys: &[&str]) -> Vec<KeyedChild<String>> {
    keys.iter()
        .map(|key| KeyedChild::new(*key, format!("<li>{key}</li>")))
        .collect()
}

fn keys(children: &[KeyedChild<String>]) -> Vec<&str> {
    children.iter().filter_map(KeyedChild::key).collect()
}

/// Mount a group, run its first enter batch to completion, and hand it
/// back settled.
fn settled(initial: &[&str]) -> (StaggerGroup<String>, RecordingBackend) {
    let mut group = StaggerGroup::new(GroupConfig::default(), items(initial));
    let mut backend = RecordingBackend::new();
    backend.mount_all(initial.iter().copied());
    group.on_mount(&mut backend);
    for key in initial {
        group.on_enter_begin(key, &mut backend);
        group.on_enter_complete(key, &mut backend);
    }
    group.drain_events();
    group.clear_render_flag();
    backend.clear_calls();
    (group, backend)
}

#[test]
fn canonical_update_walks_enter_and_leave() -> Result<()> {
    let (mut group, mut backend) = settled(&["a", "b"]);

    // [a, b] -> [b, c]: c enters, a leaves, both stay displayed meanwhile.
    group.on_props_changed(items(&["b", "c"]));
    assert_eq!(keys(group.display_children()), vec!["a", "b", "c"]);
    assert_eq!(group.child_phase("c"), ChildPhase::Entering);
    assert_eq!(group.child_phase("a"), ChildPhase::Leaving);
    assert_eq!(group.child_phase("b"), ChildPhase::Visible);

    // Host rendered the merged list; the new node exists now.
    backend.mount("c");
    group.on_update(&mut backend);

    let enter = backend.last_play_for("c").expect("enter play for c");
    assert_eq!(enter.phase, Phase::Enter);
    assert_eq!(enter.delay_ms, 0.0);
    let leave = backend.last_play_for("a").expect("leave play for a");
    assert_eq!(leave.phase, Phase::Leave);

    // Engine callbacks for both keys.
    group.on_enter_begin("c", &mut backend);
    group.on_leave_begin("a", &mut backend);
    assert!(group.visibility("c"));
    assert!(group.visibility("a"), "leaving content stays up while animating");

    group.on_enter_complete("c", &mut backend);
    group.on_leave_complete("a", &mut backend);

    // Last leave done: the display list flushes down to the rendered list.
    assert_eq!(keys(group.display_children()), vec!["b", "c"]);
    assert!(!group.visibility("a"));
    assert!(group.needs_render());

    let events = group.drain_events();
    assert_eq!(events.last(), Some(&GroupEvent::Flushed { kept: 2 }));

    Ok(())
}

#[test]
fn reentry_mid_leave_restarts_cleanly() -> Result<()> {
    let (mut group, mut backend) = settled(&["a", "b"]);

    group.on_props_changed(items(&["b"]));
    group.on_update(&mut backend);
    group.on_leave_begin("a", &mut backend);
    backend.clear_calls();

    // "a" comes back before its leave completes.
    group.on_props_changed(items(&["a", "b"]));
    group.on_update(&mut backend);

    let calls = backend.calls();
    assert!(
        matches!(&calls[0], BackendCall::Stop { key } if key == "a"),
        "the running leave is stopped before the fresh enter"
    );
    let replay = backend.last_play_for("a").expect("fresh enter play");
    assert_eq!(replay.phase, Phase::Enter);
    assert!(
        group.visibility("a"),
        "content never blinks out across the turnaround"
    );

    group.on_enter_begin("a", &mut backend);
    group.on_enter_complete("a", &mut backend);
    assert_eq!(group.child_phase("a"), ChildPhase::Visible);

    Ok(())
}

#[test]
fn unmount_releases_every_engine_hold() -> Result<()> {
    let mut group = StaggerGroup::new(GroupConfig::default(), items(&["a", "b"]));
    let mut backend = RecordingBackend::new();
    backend.mount_all(["a", "b"]);
    group.on_mount(&mut backend);
    group.on_enter_begin("a", &mut backend);
    group.on_enter_begin("b", &mut backend);
    backend.clear_calls();

    // Both nodes are mid-enter when the whole group goes away.
    group.on_will_unmount(&mut backend);
    assert_eq!(backend.stop_count(), 2);

    // A straggler completion after unmount changes nothing.
    group.drain_events();
    group.on_leave_complete("a", &mut backend);
    assert!(group.drain_events().is_empty());
    assert!(group.display_children().is_empty());

    Ok(())
}

#[test]
fn config_from_json_drives_the_choreography() -> Result<()> {
    let config: GroupConfig = serde_json::from_str(
        r#"{
            "type": ["bottom", "alpha"],
            "interval": [60.0, 30.0],
            "duration": 250.0,
            "leave_reverse": true,
            "animating_class": ["fade-in", "fade-out"]
        }"#,
    )?;

    let mut group = StaggerGroup::new(config, items(&["a", "b", "c"]));
    let mut backend = RecordingBackend::new();
    backend.mount_all(["a", "b", "c"]);
    group.on_mount(&mut backend);

    // Enter side: bottom preset, 60ms stagger, shared 250ms duration.
    let b = backend.last_play_for("b").expect("enter play for b");
    assert_eq!(b.delay_ms, 60.0);
    assert_eq!(b.duration_ms, 250.0);
    assert_eq!(
        b.props.get(MotionProperty::TranslateY),
        Some(ValuePair::new(0.0, 30.0))
    );

    group.on_enter_begin("a", &mut backend);
    assert!(matches!(
        backend.calls().last(),
        Some(BackendCall::SetClass { class, active: true, .. }) if class == "fade-in"
    ));
    backend.clear_calls();

    // Leave side: alpha preset reversed, 30ms stagger in reverse order.
    group.on_props_changed(items(&[]));
    group.on_update(&mut backend);

    let a = backend.last_play_for("a").expect("leave play for a");
    assert_eq!(a.delay_ms, 60.0, "first key goes last under leave_reverse");
    assert_eq!(
        a.props.get(MotionProperty::Opacity),
        Some(ValuePair::new(0.0, 1.0))
    );
    assert_eq!(backend.last_play_for("c").expect("leave play for c").delay_ms, 0.0);

    Ok(())
}
