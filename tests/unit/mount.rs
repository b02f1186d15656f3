use super::*;
use crate::host::synthetic::SyntheticHost;
use crate::transition::config::TransitionConfig;

fn transition(y_offset: f64) -> ScrollTransition {
    ScrollTransition::new(TransitionConfig {
        y_offset,
        ..TransitionConfig::default()
    })
}

fn mounted(host: &SyntheticHost, sink: RecordingSink) -> MountedTransition {
    let provider: Rc<dyn GeometryProvider> = Rc::new(host.clone());
    MountedTransition::mount(provider, transition(50.0), sink)
}

#[test]
fn mount_renders_initial_frame_and_registers_once() {
    let host = SyntheticHost::new(800.0);
    host.layout(800.0, 800.0);
    let before = host.listener_count();
    let sink = RecordingSink::new();

    let m = mounted(&host, sink.clone());
    assert!(m.is_live());
    assert_eq!(host.listener_count(), before + 1);
    assert_eq!(sink.len(), 1);
    assert_eq!(sink.last().unwrap().progress, 0.0);
    assert_eq!(sink.last().unwrap().rising.translate_y, 50.0);
}

#[test]
fn scrolling_drives_frames() {
    let host = SyntheticHost::new(800.0);
    host.layout(800.0, 800.0);
    let sink = RecordingSink::new();
    let m = mounted(&host, sink.clone());

    host.scroll_to(400.0);
    assert_eq!(m.last_frame().unwrap().progress, 0.5);
    host.scroll_to(800.0);
    let last = sink.last().unwrap();
    assert_eq!(last.progress, 1.0);
    assert_eq!(last.rising.translate_y, 0.0);
}

#[test]
fn identical_geometry_is_not_reapplied() {
    let host = SyntheticHost::new(800.0);
    host.layout(800.0, 800.0);
    let sink = RecordingSink::new();
    let _m = mounted(&host, sink.clone());

    host.emit(HostEvent::Scroll);
    host.emit(HostEvent::Resize);
    assert_eq!(sink.len(), 1);

    host.resize(600.0);
    assert_eq!(sink.len(), 2);
}

#[test]
fn unmount_restores_listener_count_and_stops_frames() {
    let host = SyntheticHost::new(800.0);
    host.layout(800.0, 800.0);
    let before = host.listener_count();
    let sink = RecordingSink::new();

    let m = mounted(&host, sink.clone());
    m.unmount();
    assert_eq!(host.listener_count(), before);

    let applied = sink.len();
    host.scroll_to(300.0);
    assert_eq!(sink.len(), applied);
}

#[test]
fn remount_does_not_accumulate_listeners() {
    let host = SyntheticHost::new(800.0);
    host.layout(0.0, 800.0);
    for _ in 0..5 {
        let m = mounted(&host, RecordingSink::new());
        assert_eq!(host.listener_count(), 1);
        drop(m);
    }
    assert_eq!(host.listener_count(), 0);
}

#[test]
fn eventless_host_gets_static_frame() {
    let host = SyntheticHost::without_events(800.0);
    host.layout(0.0, 800.0);
    let sink = RecordingSink::new();
    let m = mounted(&host, sink.clone());

    assert!(!m.is_live());
    assert_eq!(sink.len(), 1);
    assert_eq!(sink.last().unwrap().progress, 0.0);
}

#[test]
fn closures_work_as_sinks() {
    let host = SyntheticHost::new(800.0);
    host.layout(800.0, 800.0);
    let seen = Rc::new(RefCell::new(Vec::new()));
    let s = Rc::clone(&seen);
    let provider: Rc<dyn GeometryProvider> = Rc::new(host.clone());
    let _m = MountedTransition::mount(provider, transition(0.0), move |f: &TransitionFrame| {
        s.borrow_mut().push(f.progress)
    });
    host.scroll_to(200.0);
    assert_eq!(*seen.borrow(), vec![0.0, 0.25]);
}

#[test]
fn rubber_band_at_page_root_reads_as_progress_zero() {
    let host = SyntheticHost::new(800.0);
    host.layout(0.0, 800.0);
    let sink = RecordingSink::new();
    let _m = mounted(&host, sink.clone());

    host.scroll_to(-120.0);
    host.scroll_to(0.0);
    let progress: Vec<f64> = sink.frames().iter().map(|f| f.progress).collect();
    assert_eq!(progress, vec![1.0, 0.0, 1.0]);
}
