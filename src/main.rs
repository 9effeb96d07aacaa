use anyhow::{Context, Result};
use env_logger::Env;
use log::info;

use generic_lists::{ArrayList, LinkedList, List, Person};

fn numbers(list: &mut dyn List<i32>) -> Result<()> {
    list.add(10);
    list.add(20);
    list.add(30);
    println!("ArrayList Count: {}", list.len());
    println!(
        "ArrayList[1]: {}",
        list.get(1).context("Failed to read the second number")?
    );

    list.remove(&10);
    println!("After removing 10 - Count: {}", list.len());
    println!(
        "ArrayList[0]: {}",
        list.get(0).context("Failed to read the first number")?
    );
    Ok(())
}

fn words(list: &mut dyn List<String>) -> Result<()> {
    for word in ["Hello", "World", "!"] {
        list.add(word.to_string());
    }
    println!("LinkedList Count: {}", list.len());
    println!(
        "LinkedList[0]: {}",
        list.get(0).context("Failed to read the first word")?
    );
    Ok(())
}

fn people(list: &mut dyn List<Person>) -> Result<()> {
    list.add(Person::new("Ivan", 25));
    list.add(Person::new("Maria", 30));

    let first = list
        .get(0)
        .context("Failed to read the first person")?
        .clone();
    println!("Person at index 0: {}", first);

    list.remove(&first);
    println!("After removal - Count: {}", list.len());
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    info!("Array list of integers");
    let mut array_list: ArrayList<i32> = ArrayList::new();
    numbers(&mut array_list)?;
    println!("{}", array_list);

    info!("Linked list of strings");
    let mut linked_list: LinkedList<String> = LinkedList::new();
    words(&mut linked_list)?;
    println!("{}", linked_list);

    info!("Array list of persons");
    let mut person_list: ArrayList<Person> = ArrayList::new();
    people(&mut person_list)?;
    println!("{}", person_list);

    Ok(())
}
