//! Signup form driven from stdin.
//!
//! Each line is either `<field>=<value>` (an edit) or `submit`.
//! Fields: `email`, `password`, `confirm`. The rendered form is printed
//! after every line; logs go to `signup_form.log`.

use std::fs::File;
use std::io::{self, BufRead};
use std::sync::{Arc, Mutex};

use simplelog::{Config, LevelFilter, WriteLogger};
use validated_input::prelude::*;

#[derive(Default)]
struct Values {
    email: String,
    password: String,
    confirm: String,
}

fn configs(values: &Values) -> [FieldConfig; 3] {
    [
        FieldConfig::new("Email", values.email.as_str())
            .email()
            .placeholder("you@example.com")
            .with_addon("@")
            .empty_message("Email is required")
            .error_message("Please enter a valid email"),
        FieldConfig::new("Password", values.password.as_str())
            .input_type("password")
            .password(8)
            .empty_message("Password is required")
            .error_message("At least 8 characters, no spaces"),
        FieldConfig::new("Confirm password", values.confirm.as_str())
            .id("confirm")
            .input_type("password")
            .re_password(values.password.as_str())
            .empty_message("Please repeat the password")
            .error_message("Passwords do not match"),
    ]
}

fn main() -> io::Result<()> {
    let log_file = File::create("signup_form.log")?;
    WriteLogger::init(LevelFilter::Trace, Config::default(), log_file)
        .map_err(io::Error::other)?;

    let values = Arc::new(Mutex::new(Values::default()));

    let [email, password, confirm] = configs(&Values::default());
    let store = |set: fn(&mut Values, &str)| {
        let values = Arc::clone(&values);
        move |v: &str| {
            if let Ok(mut guard) = values.lock() {
                set(&mut guard, v);
            }
        }
    };
    let mut fields = [
        ValidatedInput::new(email).on_change(store(|s, v| s.email = v.to_string())),
        ValidatedInput::new(password).on_change(store(|s, v| s.password = v.to_string())),
        ValidatedInput::new(confirm).on_change(store(|s, v| s.confirm = v.to_string())),
    ];

    for line in io::stdin().lock().lines() {
        let line = line?;
        let line = line.trim();

        if line == "submit" {
            // Validate every field so each one shows its own error.
            let verdicts: Vec<bool> = fields.iter_mut().map(|field| field.validate()).collect();
            let all_valid = verdicts.iter().all(|ok| *ok);
            println!("submit: {}", if all_valid { "accepted" } else { "rejected" });
        } else if let Some((name, value)) = line.split_once('=') {
            let index = match name {
                "email" => 0,
                "password" => 1,
                "confirm" => 2,
                other => {
                    eprintln!("unknown field '{other}'");
                    continue;
                }
            };
            fields[index].handle_change(value);
        } else {
            eprintln!("expected <field>=<value> or submit");
            continue;
        }

        // Hand the controlled values back, as a host would on re-render.
        let next = match values.lock() {
            Ok(guard) => configs(&guard),
            Err(_) => break,
        };
        for (field, config) in fields.iter_mut().zip(next) {
            field.set_config(config);
            if field.is_dirty() {
                println!("{}", to_html(&field.render()));
                field.clear_dirty();
            }
        }
    }

    Ok(())
}
