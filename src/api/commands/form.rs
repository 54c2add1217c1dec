//! Interactive conversion form
//!
//! Numbered menus for category and units, then a value prompt, over any
//! line-oriented input and output. Blank answers keep the shown default.

use std::io::{BufRead, Write};

use super::converter::{convert_units_command, default_units};
use crate::core::features::unit_converter::format::format_number;
use crate::core::features::unit_converter::{Category, Unit};
use crate::shared::error::{AppError, AppResult};
use crate::shared::errors::ConversionResult;
use crate::shared::settings::ConverterSettings;
use crate::shared::types::{ConvertUnitsRequest, ConvertUnitsResponse};

const QUICK_GUIDE: &str = "\
How to use this converter:
  1. Select your conversion category
  2. Choose your units (from/to)
  3. Enter your value
  4. Get the result
Pick an entry by number, name or symbol. Press Enter to keep the default.
";

pub struct ConverterForm<R, W> {
    input: R,
    output: W,
    settings: ConverterSettings,
}

impl<R: BufRead, W: Write> ConverterForm<R, W> {
    pub fn new(input: R, output: W, settings: ConverterSettings) -> Self {
        Self { input, output, settings }
    }

    /// Walk through the form once and print the result
    pub fn run(&mut self) -> AppResult<ConvertUnitsResponse> {
        writeln!(self.output, "Unit Converter")?;
        writeln!(self.output, "{}", QUICK_GUIDE)?;

        let default_category = self
            .settings
            .preferences
            .default_category
            .parse::<Category>()?;
        let category = self.select(
            "Select Category",
            &Category::ALL,
            default_category,
            |category| category.name().to_string(),
            |key| key.parse::<Category>(),
        )?;

        let definition = category.definition();
        let (default_from, default_to) = default_units(&self.settings, category);
        let from = self.select(
            "From Unit",
            definition.units,
            default_from,
            describe_unit,
            |key| definition.resolve_unit(key),
        )?;
        let to = self.select(
            "To Unit",
            definition.units,
            default_to,
            describe_unit,
            |key| definition.resolve_unit(key),
        )?;

        let amount = self.read_value(self.settings.preferences.default_value)?;

        let request = ConvertUnitsRequest {
            category: category.name().to_string(),
            from_unit: from.name().to_string(),
            to_unit: to.name().to_string(),
            amount,
        };
        let response = convert_units_command(request, self.settings.decimal_places())?;

        writeln!(self.output)?;
        writeln!(self.output, "Result")?;
        writeln!(self.output, "  {} {}", response.formatted_amount, response.from_unit)?;
        writeln!(self.output, "  =")?;
        writeln!(self.output, "  {} {}", response.formatted_result, response.to_unit)?;
        self.output.flush()?;

        Ok(response)
    }

    fn select<T: Copy + PartialEq>(
        &mut self,
        label: &str,
        options: &[T],
        default: T,
        describe: impl Fn(T) -> String,
        parse: impl Fn(&str) -> ConversionResult<T>,
    ) -> AppResult<T> {
        writeln!(self.output, "{}:", label)?;
        for (index, option) in options.iter().enumerate() {
            let marker = if *option == default { "*" } else { " " };
            writeln!(self.output, " {}{}) {}", marker, index + 1, describe(*option))?;
        }

        loop {
            let answer = self.prompt(&format!("{} [{}]", label, describe(default)))?;
            if answer.is_empty() {
                return Ok(default);
            }

            if let Ok(number) = answer.parse::<usize>() {
                match number.checked_sub(1).and_then(|index| options.get(index)) {
                    Some(option) => return Ok(*option),
                    None => {
                        writeln!(self.output, "  No entry numbered {}, pick 1-{}", number, options.len())?;
                        continue;
                    }
                }
            }

            match parse(&answer) {
                Ok(option) if options.contains(&option) => return Ok(option),
                Ok(_) => writeln!(self.output, "  '{}' is not one of the listed entries", answer)?,
                Err(e) => writeln!(self.output, "  {}", e)?,
            }
        }
    }

    fn read_value(&mut self, default: f64) -> AppResult<f64> {
        let decimals = self.settings.decimal_places();
        loop {
            let answer = self.prompt(&format!("Enter Value [{}]", format_number(default, decimals)))?;
            if answer.is_empty() {
                return Ok(default);
            }

            match answer.replace(',', "").parse::<f64>() {
                Ok(value) if value.is_finite() => return Ok(value),
                _ => writeln!(self.output, "  Invalid value '{}': enter a number", answer)?,
            }
        }
    }

    fn prompt(&mut self, text: &str) -> AppResult<String> {
        write!(self.output, "{}: ", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(AppError::Validation("Input ended before the form was completed".to_string()));
        }
        Ok(line.trim().to_string())
    }
}

fn describe_unit(unit: Unit) -> String {
    format!("{} ({})", unit.name(), unit.symbol())
}
