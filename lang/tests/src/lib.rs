pub mod utils {
    use simple_driver::{Driver, find};
    use simple_dynamics::Env;
    use simple_syntax::Node;

    pub fn wrapper_program(name: &str) {
        let program = find(name).unwrap();
        match Driver::default().test(&program, false) {
            | Ok(_) => {}
            | Err(err) => {
                eprintln!("{}", err);
                panic!("Error running program");
            }
        }
    }

    pub fn env<const N: usize>(bindings: [(&str, Node); N]) -> Env {
        bindings.into_iter().collect()
    }
}

#[macro_export]
macro_rules! lib_program {
    ($name:ident, $program:expr) => {
        #[test]
        fn $name() {
            ::simple_tests::utils::wrapper_program($program);
        }
    };
}
