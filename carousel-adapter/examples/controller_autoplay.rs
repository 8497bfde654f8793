use carousel::{CarouselOptions, Measurements, PointerInput, PointerKind, SlideGeometry};
use carousel_adapter::{Control, Controller, Event};

fn main() {
    // Example: a frame loop driving autoplay, a swipe and a button press through the controller.
    //
    // An adapter would:
    // - forward host events with handle(event, now_ms)
    // - call tick(now_ms) every frame and write displayed_offset() into the track transform
    // - answer pending layout frames with on_frame(now_ms, measure)
    let measure = |cursor: usize| {
        Some(Measurements {
            container_width: 800.0,
            active_slide: SlideGeometry {
                left: cursor as f32 * 340.0,
                width: 320.0,
            },
        })
    };

    let mut c = Controller::new(CarouselOptions::default().with_autoplay_interval_ms(2_000));
    let mut pending = c.mount(0).request_frame;

    let mut now_ms = 0u64;
    while now_ms < 6_000 {
        now_ms += 16;

        match now_ms {
            3_008 => {
                let touch = PointerInput {
                    pointer_id: 1,
                    kind: PointerKind::Touch,
                    x: 300.0,
                };
                c.handle(Event::PointerDown(touch), now_ms);
                pending |= c
                    .handle(Event::PointerMove(PointerInput { x: 220.0, ..touch }), now_ms)
                    .request_frame;
                c.handle(Event::PointerUp { pointer_id: 1 }, now_ms);
            }
            4_512 => {
                pending |= c
                    .handle(Event::Activate(Control::Previous), now_ms)
                    .request_frame;
            }
            _ => {}
        }

        let out = c.tick(now_ms);
        pending |= out.request_frame;
        if pending {
            pending = false;
            c.on_frame(now_ms, measure);
        }

        if out.moved || now_ms % 400 == 0 {
            println!(
                "t={now_ms} {} offset={:.1}",
                c.carousel().announcement(),
                c.displayed_offset()
            );
        }
    }
}
