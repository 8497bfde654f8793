use carousel::{Carousel, CarouselOptions, Key, Measurements, SlideGeometry, SlideState};

fn main() {
    // Example: drive the engine by hand the way a UI adapter would.
    //
    // Slides are 300px wide, laid out back to back inside a 600px container.
    let measure = |cursor: usize| {
        Some(Measurements {
            container_width: 600.0,
            active_slide: SlideGeometry {
                left: cursor as f32 * 300.0,
                width: 300.0,
            },
        })
    };

    let mut c = Carousel::new(CarouselOptions::default().with_autoplay_interval_ms(5_000));
    c.mount(0);
    c.on_frame(measure);
    println!(
        "mounted: cursor={} {} offset={} autoplay={:?}",
        c.cursor(),
        c.announcement(),
        c.offset(),
        c.autoplay_state()
    );

    // Autoplay ticks (the adapter calls tick from its timer).
    for now_ms in [5_000u64, 10_000] {
        c.tick(now_ms);
        c.on_frame(measure);
        println!("t={now_ms} {} offset={}", c.announcement(), c.offset());
    }

    // Keyboard navigation with focus inside the region.
    c.focus_in();
    c.key_down(Key::ArrowLeft, 11_000);
    c.on_frame(measure);
    println!(
        "after ArrowLeft: {} focus={:?} autoplay={:?}",
        c.announcement(),
        c.take_focus_request(),
        c.autoplay_state()
    );
    c.focus_out(12_000);

    // What a renderer would draw.
    c.for_each_slide(|slide| {
        if slide.state != SlideState::Far {
            println!(
                "  slide {} ({:?}) {} - {}",
                slide.index,
                slide.state,
                slide.item.name,
                c.slide_label(slide.index)
            );
        }
    });

    c.unmount();
    println!("unmounted: autoplay={:?}", c.autoplay_state());
}
