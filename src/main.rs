use mathtools::demo;

fn main() {
    demo::run();
}
