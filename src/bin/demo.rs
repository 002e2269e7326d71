use std::io::Write;

use env_logger::{Builder, Target};
use linked_list::SinglyLinkedList;
use log::{info, LevelFilter};

fn init_logging() {
    Builder::new()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] [{}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .target(Target::Stdout)
        .init();
}

fn main() {
    init_logging();

    let mut list = SinglyLinkedList::new();

    print!("Allocating Nodes... ");
    for i in 0..10 {
        list.push(i);
    }
    println!("done!");

    println!("The list now contains:");
    println!("{list}");

    list.pop();
    list.pop();
    list.pop();
    println!("After 3 pop()'s");
    println!("{list}");

    println!("Creating list2 by taking the nodes of list ...");
    let mut list2 = list.take();
    println!("After the move, list is:");
    println!("{list}");
    println!("and list2 is:");
    println!("{list2}");

    let list3 = list2.clone();
    println!("list3 is a copy of list2:");
    println!("{list3}");

    list2.pop();
    list2.pop();
    list2.pop();
    println!("After 3 pop()'s list2 is:");
    println!("{list2}");
    println!("while list3 still is:");
    println!("{list3}");

    // both peeks read the same head, nothing is removed
    for attempt in ["peek()", "... Another peek()"] {
        match list2.peek() {
            Ok(value) => println!("{attempt} on list2 returns: {value}"),
            Err(e) => println!("EXCEPTION: {e}"),
        }
    }

    list.clean();
    match list.peek() {
        Ok(value) => println!("peek() on list returns: {value}"),
        Err(e) => println!("\nEXCEPTION: {e}"),
    }

    println!("Now after cleaning list2...");
    list2.clean();
    println!("{list2}");

    info!("dropping remaining lists");
}
