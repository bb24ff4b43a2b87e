//! Interactive list session driven by line commands.

use std::io::BufRead;
use std::str::FromStr;

use anyhow::{anyhow, bail, Context};
use broker_core::{ListController, ListFilter, Notifier, Severity};
use termcolor::WriteColor;
use tracing::debug;

use crate::{
    api::ApiClient,
    formatters::{print_record, ListFormatter},
    listing::Resource,
};

const HELP: &str = "\
next | prev | page N        페이지 이동
set FIELD VALUE             검색 조건 입력 (search 로 적용)
unset FIELD                 검색 조건 삭제
search                      입력한 조건으로 검색
quick FIELD VALUE           조건을 바로 적용
reset                       필터 초기화
refresh                     새로고침
show ID                     상세 보기
help | quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseCommand {
    Next,
    Prev,
    Page(u32),
    Set { field: String, value: String },
    Unset { field: String },
    Search,
    Quick { field: String, value: String },
    Reset,
    Refresh,
    Show(i64),
    Help,
    Quit,
}

impl FromStr for BrowseCommand {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (verb, rest) = line
            .split_once(char::is_whitespace)
            .map(|(verb, rest)| (verb, rest.trim()))
            .unwrap_or((line, ""));

        let field_value = |rest: &str| -> anyhow::Result<(String, String)> {
            let (field, value) = rest
                .split_once(char::is_whitespace)
                .map(|(field, value)| (field, value.trim()))
                .unwrap_or((rest, ""));
            if field.is_empty() || value.is_empty() {
                bail!("usage: {} FIELD VALUE", verb);
            }
            Ok((field.to_string(), value.to_string()))
        };

        let command = match verb.to_ascii_lowercase().as_str() {
            "next" | "n" => BrowseCommand::Next,
            "prev" | "p" => BrowseCommand::Prev,
            "page" => BrowseCommand::Page(
                rest.parse()
                    .with_context(|| format!("'{}' is not a page number", rest))?,
            ),
            "set" => {
                let (field, value) = field_value(rest)?;
                BrowseCommand::Set { field, value }
            }
            "unset" if !rest.is_empty() => BrowseCommand::Unset {
                field: rest.to_string(),
            },
            "unset" => bail!("usage: unset FIELD"),
            "search" | "s" => BrowseCommand::Search,
            "quick" => {
                let (field, value) = field_value(rest)?;
                BrowseCommand::Quick { field, value }
            }
            "reset" => BrowseCommand::Reset,
            "refresh" | "r" => BrowseCommand::Refresh,
            "show" => BrowseCommand::Show(
                rest.parse()
                    .with_context(|| format!("'{}' is not an id", rest))?,
            ),
            "help" | "?" => BrowseCommand::Help,
            "quit" | "q" | "exit" => BrowseCommand::Quit,
            "" => return Err(anyhow!("empty command")),
            other => bail!("unknown command '{}', try 'help'", other),
        };

        Ok(command)
    }
}

pub struct BrowseSession<'a, R: Resource> {
    api: &'a ApiClient,
    controller: ListController<R::Filter, R::Item>,
    formatter: ListFormatter,
}

impl<'a, R: Resource> BrowseSession<'a, R> {
    pub fn new(
        api: &'a ApiClient,
        controller: ListController<R::Filter, R::Item>,
        formatter: ListFormatter,
    ) -> Self {
        BrowseSession {
            api,
            controller,
            formatter,
        }
    }

    /// Reads commands until `quit` or end of input
    pub fn run(
        &mut self,
        input: impl BufRead,
        out: &mut dyn WriteColor,
        notifier: &dyn Notifier,
    ) -> anyhow::Result<()> {
        self.settle(out, notifier)?;

        for line in input.lines() {
            let line = line.context("Failed to read command")?;
            if line.trim().is_empty() {
                continue;
            }

            let command = match line.parse::<BrowseCommand>() {
                Ok(command) => command,
                Err(err) => {
                    notifier.show_toast(&err.to_string(), Severity::Warning);
                    continue;
                }
            };

            debug!(?command, "browse command");
            if command == BrowseCommand::Quit {
                break;
            }

            self.apply(command, out, notifier)?;
            self.settle(out, notifier)?;
        }

        Ok(())
    }

    fn apply(
        &mut self,
        command: BrowseCommand,
        out: &mut dyn WriteColor,
        notifier: &dyn Notifier,
    ) -> anyhow::Result<()> {
        match command {
            BrowseCommand::Next => {
                if !self.controller.next_page() {
                    notifier.show_toast("마지막 페이지입니다.", Severity::Info);
                }
            }
            BrowseCommand::Prev => {
                if !self.controller.previous_page() {
                    notifier.show_toast("첫 페이지입니다.", Severity::Info);
                }
            }
            BrowseCommand::Page(page) => self.controller.change_page(page),
            BrowseCommand::Set { field, value } => {
                self.edit(&field, Some(&value), notifier);
                self.print_pending(out)?;
            }
            BrowseCommand::Unset { field } => {
                self.edit(&field, None, notifier);
                self.print_pending(out)?;
            }
            BrowseCommand::Search => self.controller.submit_search(),
            BrowseCommand::Quick { field, value } => {
                if let Err(err) = self.controller.select_quick_filter(&field, Some(&value)) {
                    notifier.show_toast(&err.to_string(), Severity::Warning);
                }
            }
            BrowseCommand::Reset => self.controller.reset_filters(),
            BrowseCommand::Refresh => self.controller.refresh(),
            BrowseCommand::Show(id) => self.show(id, out, notifier)?,
            BrowseCommand::Help => writeln!(out, "{}", HELP)?,
            BrowseCommand::Quit => {}
        }

        Ok(())
    }

    fn edit(&mut self, field: &str, value: Option<&str>, notifier: &dyn Notifier) {
        if let Err(err) = self.controller.set_filter_field(field, value) {
            notifier.show_toast(&err.to_string(), Severity::Warning);
        }
    }

    /// Edited but not yet searched constraints
    fn print_pending(&self, out: &mut dyn WriteColor) -> anyhow::Result<()> {
        let constraints: Vec<String> = self
            .controller
            .filter()
            .constraints()
            .into_iter()
            .map(|(name, value)| format!("{}={}", name, value))
            .collect();

        if constraints.is_empty() {
            writeln!(out, "검색 조건 없음")?;
        } else {
            writeln!(out, "검색 조건: {} (search 로 적용)", constraints.join(", "))?;
        }
        Ok(())
    }

    fn show(&self, id: i64, out: &mut dyn WriteColor, notifier: &dyn Notifier) -> anyhow::Result<()> {
        let response = R::fetch_detail(self.api, id);

        match response.into_result(R::DETAIL_FAILED) {
            Ok(detail) => print_record(out, &detail)?,
            Err(err) => match self.controller.item(id) {
                Some(item) => {
                    notifier.show_toast(&err.to_string(), Severity::Warning);
                    print_record(out, item)?;
                }
                None => notifier.show_toast(&err.to_string(), Severity::Error),
            },
        }

        Ok(())
    }

    /// Runs the due fetch, if any, and re-renders the page
    fn settle(&mut self, out: &mut dyn WriteColor, notifier: &dyn Notifier) -> anyhow::Result<()> {
        let api = self.api;
        let outcome = self
            .controller
            .fetch_with(|filter| R::fetch_page(api, filter), notifier);

        if outcome.is_some() {
            self.formatter.print_page(
                out,
                self.controller.items(),
                self.controller.pagination(),
                R::empty_text(self.controller.filter()),
            )?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_parse_navigation() {
        assert_eq!("next".parse::<BrowseCommand>().unwrap(), BrowseCommand::Next);
        assert_eq!(" PREV ".parse::<BrowseCommand>().unwrap(), BrowseCommand::Prev);
        assert_eq!("page 3".parse::<BrowseCommand>().unwrap(), BrowseCommand::Page(3));
        assert!("page three".parse::<BrowseCommand>().is_err());
    }

    #[test]
    fn test_parse_set_keeps_spaces_in_value() {
        assert_eq!(
            "set customerName 홍 길동".parse::<BrowseCommand>().unwrap(),
            BrowseCommand::Set {
                field: "customerName".to_string(),
                value: "홍 길동".to_string()
            }
        );
        assert!("set customerName".parse::<BrowseCommand>().is_err());
    }

    #[test]
    fn test_parse_quick_and_unset() {
        assert_eq!(
            "quick status COMPLETED".parse::<BrowseCommand>().unwrap(),
            BrowseCommand::Quick {
                field: "status".to_string(),
                value: "COMPLETED".to_string()
            }
        );
        assert_eq!(
            "unset status".parse::<BrowseCommand>().unwrap(),
            BrowseCommand::Unset {
                field: "status".to_string()
            }
        );
        assert!("unset".parse::<BrowseCommand>().is_err());
    }

    #[test]
    fn test_parse_misc() {
        assert_eq!("show 42".parse::<BrowseCommand>().unwrap(), BrowseCommand::Show(42));
        assert_eq!("q".parse::<BrowseCommand>().unwrap(), BrowseCommand::Quit);
        assert!("frobnicate".parse::<BrowseCommand>().is_err());
    }
}
