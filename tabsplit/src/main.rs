#![warn(clippy::uninlined_format_args)]

mod bootstrap;
mod repl;
mod seed;

fn main() {
    bootstrap::run();
}
