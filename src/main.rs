//! Scripted terminal walkthrough of one staggered group.
//!
//! Plays the full lifecycle against a console backend: initial enters, an
//! update that adds and removes keys, the flush once the last leave
//! completes, and the unmount stops. Run with `RUST_LOG=debug` to also see
//! the controller's tracing.

use std::collections::HashSet;

use anyhow::Result;

use stagger::{
    AnimationBackend, GroupConfig, KeyedChild, MotionPreset, PerPhase, PlayCommand, StaggerGroup,
};

/// Backend that narrates every engine command to stdout.
#[derive(Debug, Default)]
struct ConsoleBackend {
    mounted: HashSet<String>,
}

impl ConsoleBackend {
    fn new() -> Self {
        Self::default()
    }

    /// Commit the display list, as a host renderer would.
    fn commit(&mut self, group: &StaggerGroup<String>) {
        self.mounted = group
            .display_children()
            .iter()
            .filter_map(|child| child.key().map(str::to_string))
            .collect();
        println!("  render <{}>", group.config().component);
        for child in group.display_children() {
            let marker = if group.is_content_visible(child) {
                "shown"
            } else {
                "withheld"
            };
            match child.key() {
                Some(key) => println!("    [{key}] {} ({marker})", child.content),
                None => println!("    [-] {} (passthrough)", child.content),
            }
        }
    }
}

impl AnimationBackend for ConsoleBackend {
    fn is_mounted(&self, key: &str) -> bool {
        self.mounted.contains(key)
    }

    fn play(&mut self, key: &str, command: &PlayCommand) {
        println!(
            "  engine: play {:?} on [{key}] delay={}ms duration={}ms",
            command.phase, command.delay_ms, command.duration_ms
        );
    }

    fn stop(&mut self, key: &str) {
        println!("  engine: stop [{key}]");
    }

    fn set_class(&mut self, key: &str, class: &str, active: bool) {
        let state = if active { "+" } else { "-" };
        println!("  node [{key}]: class {state}{class}");
    }
}

fn report(group: &mut StaggerGroup<String>) {
    for event in group.drain_events() {
        println!("  event: {event:?}");
    }
    group.clear_render_flag();
}

fn main() -> Result<()> {
    let _ = env_logger::try_init();

    let config = GroupConfig::new()
        .with_kind(PerPhase::split(MotionPreset::Bottom, MotionPreset::Alpha))
        .with_interval([120.0, 60.0])
        .with_duration(300.0)
        .with_leave_reverse(true);

    let menu = vec![
        KeyedChild::new("home", "Home".to_string()),
        KeyedChild::new("docs", "Documentation".to_string()),
        KeyedChild::new("about", "About".to_string()),
    ];
    let mut group = StaggerGroup::new(config, menu);
    let mut backend = ConsoleBackend::new();

    // Initial mount: everything enters with a 120ms stagger.
    println!("mount");
    backend.commit(&group);
    group.on_mount(&mut backend);
    for key in ["home", "docs", "about"] {
        group.on_enter_begin(key, &mut backend);
        group.on_enter_complete(key, &mut backend);
    }
    report(&mut group);
    backend.commit(&group);

    // A new list arrives: "about" leaves, "blog" enters, "docs" stays.
    println!("update -> [home, docs, blog]");
    group.on_props_changed(vec![
        KeyedChild::new("home", "Home".to_string()),
        KeyedChild::new("docs", "Documentation".to_string()),
        KeyedChild::new("blog", "Blog".to_string()),
    ]);
    backend.commit(&group);
    group.on_update(&mut backend);

    group.on_enter_begin("blog", &mut backend);
    group.on_leave_begin("about", &mut backend);
    group.on_enter_complete("blog", &mut backend);
    group.on_leave_complete("about", &mut backend);
    report(&mut group);

    // The flush dropped the departed key from the display list.
    backend.commit(&group);

    println!("unmount");
    group.on_will_unmount(&mut backend);

    Ok(())
}
