// Example: simulate a pointer gesture and watch the carousel commit and snap.
use carousel::{
    Carousel, CarouselOptions, ClassNames, Length, Surface, Transform, Transition,
};

/// Prints every style write instead of touching a real UI.
struct PrintSurface;

impl Surface for PrintSurface {
    fn mount(&mut self, classes: &ClassNames, slide_count: usize) {
        println!(
            "mount: .{} > .{} > {slide_count} x .{}",
            classes.container, classes.track, classes.slide
        );
    }

    fn set_track_size(&mut self, width: Length, height: Length) {
        println!("track: width={width} height={height}");
    }

    fn set_slide_size(&mut self, index: usize, width: Length, height: Length) {
        println!("slide[{index}]: width={width} height={height}");
    }

    fn set_transform(&mut self, transform: Transform) {
        println!("transform: {transform}");
    }

    fn set_transition(&mut self, transition: Transition) {
        println!("transition: {transition}");
    }
}

fn main() {
    let mut surface = PrintSurface;
    let mut c = Carousel::new(3, 320.0, CarouselOptions::new()).expect("three slides");
    c.mount(&mut surface);

    // Drag left by 180px in 30px steps: commits to slide 1 once past 100px.
    c.pointer_down(400.0, 0, &mut surface);
    for step in 1..=6 {
        let x = 400.0 - 30.0 * step as f32;
        if let Some(dir) = c.pointer_move(x, &mut surface) {
            println!("committed {dir:?} -> index {}", c.current_index());
        }
    }
    c.pointer_up(100, &mut surface);

    // Sample the snap as a host without CSS transitions would.
    let mut now_ms = 100u64;
    while c.is_settling() {
        now_ms += 100;
        println!("t={now_ms}ms visual_offset={}", c.visual_offset(now_ms));
        c.tick(now_ms);
    }

    println!("state: {:?}", c.state());
}
