// demos/basic_resolve.rs
// Run with: RUST_LOG=debug cargo run --example basic_resolve

use rs_kinematics::apis::session::{InputMode, Session};
use rs_kinematics::quantities::{QuantityId, QuantityValue};

fn print_session(session: &Session) {
    for (id, value) in session.quantities().iter() {
        match value {
            QuantityValue::Unset => {}
            QuantityValue::Provided(v) => println!("  {:<24} {:>10.3}  (given)", id.spec().display_name, v),
            QuantityValue::Derived(v) => println!("  {:<24} {:>10.3}", id.spec().display_name, v),
        }
    }
}

fn main() {
    env_logger::init();

    println!("Launch at 20 m/s, 30 degrees, -9.8 m/s²:");
    let mut session = Session::new();
    session.set_quantity(QuantityId::InitialSpeed, 20.0);
    session.set_quantity(QuantityId::Angle, 30.0);
    session.set_quantity(QuantityId::Acceleration, -9.8);
    session.set_quantity(QuantityId::YInitial, 2.0);
    let outcome = session.resolve();
    println!("{:?}", outcome);
    print_session(&session);

    if let Ok(trajectory) = session.trajectory() {
        println!("Flight path:");
        for point in trajectory.sample(0.25) {
            println!("  t = {:>5.2}  x = {:>7.3}  y = {:>6.3}", point.time, point.x, point.y);
        }
    }

    println!("\nSame launch from velocity components:");
    session.switch_mode(InputMode::Vector);
    session.set_quantity(QuantityId::VInitialI, 17.32);
    session.set_quantity(QuantityId::VInitialJ, 10.0);
    session.set_quantity(QuantityId::Acceleration, -9.8);
    println!("{:?}", session.resolve());
    print_session(&session);

    println!("\nOut-of-range input:");
    session.reset();
    session.set_quantity(QuantityId::InitialSpeed, 1500.0);
    if let Some(message) = session.resolve().message() {
        println!("  {}", message);
    }
}
