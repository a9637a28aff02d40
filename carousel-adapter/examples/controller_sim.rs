use carousel::{CarouselOptions, ClassNames, Length, Surface, Transform, Transition};
use carousel_adapter::{
    ClassTarget, Controller, Event, EventHost, EventKind, EventTarget, ListenerId, PopupPart,
    PopupStepToggle,
};

/// Prints style writes instead of touching a real UI.
struct LogSurface;

impl Surface for LogSurface {
    fn mount(&mut self, classes: &ClassNames, slide_count: usize) {
        println!("mount .{} ({slide_count} slides)", classes.container);
    }

    fn set_track_size(&mut self, width: Length, _height: Length) {
        println!("track width={width}");
    }

    fn set_slide_size(&mut self, _index: usize, _width: Length, _height: Length) {}

    fn set_transform(&mut self, transform: Transform) {
        println!("transform {transform}");
    }

    fn set_transition(&mut self, transition: Transition) {
        println!("transition {transition}");
    }
}

#[derive(Default)]
struct LogHost {
    next: u64,
}

impl EventHost for LogHost {
    fn add_listener(&mut self, target: EventTarget, kind: EventKind) -> ListenerId {
        self.next += 1;
        println!("+listener #{} {kind:?} on {target:?}", self.next);
        ListenerId(self.next)
    }

    fn remove_listener(&mut self, id: ListenerId) {
        println!("-listener #{}", id.0);
    }
}

struct LogClasses;

impl ClassTarget for LogClasses {
    fn add_class(&mut self, part: PopupPart, class: &str) {
        println!("{part:?} += {class}");
    }

    fn remove_class(&mut self, part: PopupPart, class: &str) {
        println!("{part:?} -= {class}");
    }
}

fn main() {
    // Example: an adapter forwarding host events into the controller.
    //
    // A real host would:
    // - translate DOM/toolkit events into `Event`s
    // - call tick(now_ms) from requestAnimationFrame or a timer armed at next_deadline_ms()
    // - call detach() when the widget is removed
    let mut c = Controller::new(
        4,
        360.0,
        CarouselOptions::new(),
        LogSurface,
        LogHost::default(),
    )
    .expect("non-empty container");

    c.handle(Event::PointerDown { x: 200.0 }, 0);
    for (i, x) in [180.0, 120.0, 60.0].into_iter().enumerate() {
        c.handle(Event::PointerMove { x }, 16 * (i as u64 + 1));
    }
    c.handle(Event::PointerUp, 64);

    // A burst of resize events collapses into one layout pass.
    for (i, width) in [380.0, 400.0, 420.0].into_iter().enumerate() {
        c.handle(Event::Resize { width }, 100 + 10 * i as u64);
    }

    let mut now_ms = 64u64;
    while now_ms < 800 {
        now_ms += 16;
        if let Some(off) = c.tick(now_ms) {
            if now_ms % 128 == 0 {
                println!("t={now_ms} visual_offset={off}");
            }
        }
    }
    println!("state: {:?}", c.carousel().state());

    let mut popup = PopupStepToggle::new();
    popup.sync(&mut LogClasses);
    popup.next(&mut LogClasses);
    popup.prev(&mut LogClasses);

    c.detach();
}
