use ripple_canvas::{DrawCommand, RecordingSurface};
use ripple_core::*;
use ripple_slider::{Slider, SliderConfig, SliderEventKind, SliderParts, Thumb};
use web_time::Duration;

fn print_commands(surface: &RecordingSurface) {
    for command in surface.commands() {
        match command {
            DrawCommand::Rect { rect, color, .. } => println!(
                "  rect  x={:.1} w={:.1} #{:02x}{:02x}{:02x}",
                rect.x, rect.w, color.0, color.1, color.2
            ),
            DrawCommand::Ellipse { center, rx, color, .. } => println!(
                "  dot   x={:.1} r={:.1} #{:02x}{:02x}{:02x}",
                center.x, rx, color.0, color.1, color.2
            ),
        }
    }
}

fn run_frames(clock: &TestClock, host: &Host, frames: u32) {
    for _ in 0..frames {
        clock.advance(Duration::from_millis(16));
        host.scheduler.pump();
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let clock = TestClock::new();
    let host = Host::new(
        Document::shared("ripple-"),
        Scheduler::new(clock.clone()),
        ThemeSource::new(Theme::dark()),
    );
    let (container, track, handles) = {
        let mut doc = host.document.borrow_mut();
        let container = doc.create_element("div");
        let track = doc.create_element("div");
        doc.set_rect(track, Rect::new(0.0, 0.0, 212.0, 44.0))?;
        let handles = [doc.create_element("div"), doc.create_element("div")];
        (container, track, handles)
    };
    let surface = RecordingSurface::new(Size::new(212.0, 44.0));

    let slider = Slider::new(
        &host,
        SliderConfig {
            value: 20.0,
            second_value: Some(70.0),
            range: true,
            step: 10.0,
            ticks: true,
            ..SliderConfig::default()
        },
    );
    slider.attach(
        SliderParts::new(container, track, handles[0], surface.clone())
            .with_second_handle(handles[1]),
    )?;
    for kind in [
        SliderEventKind::Start,
        SliderEventKind::Input,
        SliderEventKind::Change,
        SliderEventKind::End,
        SliderEventKind::Focus,
        SliderEventKind::Blur,
    ] {
        slider.on(kind, |e| {
            println!("event {:?}: {} / {:?}", e.kind, e.value, e.second_value);
        });
    }

    println!("initial frame:");
    print_commands(&surface);

    // Drag the first handle past the second one.
    slider
        .handle_pointer_down(handles[0], &PointerEvent::mouse_down(46.0, 22.0))
        .handle_pointer_move(&PointerEvent::mouse_move(120.0, 22.0))
        .handle_pointer_move(&PointerEvent::mouse_move(176.0, 22.0))
        .handle_pointer_up(&PointerEvent::mouse_up(176.0, 22.0));
    log::info!(
        "after drag: {} / {:?}, active {:?}",
        slider.get_value(),
        slider.get_second_value(),
        slider.active_handle()
    );

    // Keyboard on the focused second handle, then let the animation settle.
    slider.handle_focus(handles[1]);
    slider.handle_key_down(handles[1], &KeyEvent::new(Key::PageUp));
    run_frames(&clock, &host, 16);
    log::info!(
        "settled at {:?}, label visible: {}",
        slider.rendered_values(),
        slider.is_label_visible(Thumb::Second)
    );
    slider.handle_blur(handles[1], None);

    println!("final frame:");
    print_commands(&surface);

    slider.destroy();
    log::info!(
        "destroyed; {} listeners, {} observers",
        host.document.borrow().listener_count(DocumentEvents::all()),
        host.document.borrow().resize_observer_count()
    );
    Ok(())
}
