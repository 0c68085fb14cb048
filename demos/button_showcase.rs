use std::rc::Rc;
use std::time::{Duration, Instant};

use dynbutton::prelude::*;

fn main() {
    env_logger::init();

    let wakeups = Rc::new(std::cell::Cell::new(0u32));
    let counter = wakeups.clone();

    let mut button = DynamicButton::new()
        .with_style(ButtonStyle::default().corner_radius(10.0))
        .with_layout(LayoutConfig::new().insets([10.0, 16.0]).spacing(8.0))
        .wakeup(move || counter.set(counter.get() + 1))
        .on_click(|| println!("clicked!"));

    // Normal: blue gradient, white title, soft shadow
    button.set_title("Play", InteractionState::NORMAL);
    button.set_title("Pause", InteractionState::SELECTED);
    button.set_title_color(Color::WHITE, InteractionState::NORMAL);
    button.set_gradient(
        Gradient::vertical([Color::from_hex(0x1E3A8A), Color::from_hex(0x3B82F6)]),
        InteractionState::NORMAL,
    );
    button.set_border_color(Color::from_hex(0x1E40AF), InteractionState::NORMAL);
    button.set_shadow_opacity(0.5, InteractionState::NORMAL);
    button.set_shadow_radius(6.0, InteractionState::NORMAL);
    button.set_background_color(Color::from_hex(0x6B7280), InteractionState::DISABLED);
    button.set_image(
        ButtonImage::filled(18, 18, Color::WHITE),
        InteractionState::NORMAL,
    );

    button.process_pending();
    println!("wakeups after configuring: {}", wakeups.get());

    let size = button.layout(Constraints::loose(Size::new(320.0, 80.0)));
    button.set_origin(20.0, 20.0);
    println!("size: {:?}", size);
    println!("frames: {:?}", button.frames());
    print_paint(&button);

    // Press, release inside, then toggle selection with a transition.
    let press = Event::MouseDown {
        x: 30.0,
        y: 30.0,
        button: MouseButton::Left,
    };
    let release = Event::MouseUp {
        x: 30.0,
        y: 30.0,
        button: MouseButton::Left,
    };
    button.event(&press);
    run_frames(&mut button);
    button.event(&release);
    run_frames(&mut button);

    button.set_selected(true, true);
    run_frames(&mut button);
    println!("selected title: {:?}", button.views().title());

    button.set_enabled(false);
    button.process_pending();
    println!("disabled background: {:?}", button.views().background());

    // Same content, stacked vertically with the image below the title.
    *button.layout_config_mut() = LayoutConfig::new()
        .axis(Axis::Vertical)
        .image_alignment(ImageAlignment::End)
        .horizontal_alignment(HorizontalAlignment::Left);
    let frames = button.layout_in(Size::new(120.0, 90.0));
    println!("vertical frames: {:?}", frames);
}

/// Drive the button the way a host loop would, one 16 ms frame at a time.
fn run_frames(button: &mut DynamicButton) {
    let start = Instant::now();
    button.process_pending_at(start);

    let mut frame = 0;
    loop {
        frame += 1;
        let now = start + Duration::from_millis(16 * frame);
        if !button.advance_animations(now) {
            break;
        }
    }
    println!(
        "settled after {} frames in state {:?}, shadow opacity {:.2}",
        frame,
        button.state(),
        button.views().shadow_opacity()
    );
}

fn print_paint(button: &DynamicButton) {
    let mut ctx = PaintContext::new();
    button.paint(&mut ctx);
    for command in ctx.commands() {
        match command {
            DrawCommand::Image { image, rect } => println!("  image {:?} at {:?}", image, rect),
            other => println!("  {:?}", other),
        }
    }
}
