use coffee_shop::shop::CoffeeShop;
use coffee_shop::stopwatch::measure_and_report;
use colored::Colorize;

fn main() {
    println!("{}", "=== Plain wiring ===".green().bold());
    let shop = CoffeeShop::open();
    let mut maker = shop.maker();
    measure_and_report("Got coffee", || maker.brew());

    // Same heater, same siphon; only the pump binding changes.
    println!();
    println!("{}", "=== Logged pump wiring ===".green().bold());
    let shop = shop.with_logged_pump();
    let mut maker = shop.maker();
    measure_and_report("Got coffee (logged)", || maker.brew());
}
