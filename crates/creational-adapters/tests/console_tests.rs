//! Adapters wired into the demo service.

use std::fs;

use creational_adapters::{MemoryConsole, WriterConsole};
use creational_core::{
    application::DemoService,
    domain::{Family, Variant},
};

#[test]
fn memory_console_captures_abstract_factory_demo() {
    let console = MemoryConsole::new();
    let service = DemoService::new(Box::new(console.clone()));

    service.abstract_factory(&[Family::One]).unwrap();

    assert_eq!(
        console.contents(),
        "Client: Testing client code with the first factory type:\n\
         The result of the product B1.\n\
         The result of the B1 collaborating with (The result of the product A1. )"
    );
}

#[test]
fn writer_console_streams_factory_method_demo_to_file() {
    let file = tempfile::NamedTempFile::new().unwrap();
    let handle = file.reopen().unwrap();

    let service = DemoService::new(Box::new(WriterConsole::new(handle)));
    service.factory_method(&Variant::ALL).unwrap();
    drop(service);

    let written = fs::read_to_string(file.path()).unwrap();
    let lines: Vec<_> = written.lines().collect();
    assert_eq!(
        lines,
        vec![
            "ConcreteCreator1 実行",
            "ConcreteCreator2 実行",
            "Creator: The same creator's code has just worked with クラス ConcreteProduct1からのリターン",
            "Creator: The same creator's code has just worked with クラス ConcreteProduct2からのリターン",
        ]
    );
}
