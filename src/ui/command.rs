use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::{char, digit1, space1},
    combinator::{all_consuming, map, map_res, opt, recognize, rest, value},
    sequence::{pair, preceded, separated_pair},
    IResult,
};

use crate::calendar::MonthCursor;
use crate::cmds::Cmd;
use crate::error::{Error, ErrorKind, Result};
use crate::pagination::PageIntent;

fn signed_int(input: &str) -> IResult<&str, i32> {
    map_res(recognize(pair(opt(char('-')), digit1)), |s: &str| {
        s.parse::<i32>()
    })(input)
}

/// `2025-09` or `2025 9`.
fn year_month(input: &str) -> IResult<&str, (i32, i32)> {
    alt((
        separated_pair(signed_int, char('-'), signed_int),
        separated_pair(signed_int, space1, signed_int),
    ))(input)
}

fn month_cmd(input: &str) -> IResult<&str, Cmd> {
    preceded(
        pair(tag("month"), space1),
        alt((
            value(Cmd::PrevMonth, tag("prev")),
            value(Cmd::NextMonth, tag("next")),
            map(year_month, |(year, month)| Cmd::GoToMonth { year, month }),
        )),
    )(input)
}

fn page_cmd(input: &str) -> IResult<&str, Cmd> {
    preceded(
        pair(tag("page"), space1),
        map_res(rest, |s: &str| s.parse::<PageIntent>().map(Cmd::Page)),
    )(input)
}

fn plain_cmd(input: &str) -> IResult<&str, Cmd> {
    alt((
        value(Cmd::Today, tag("today")),
        value(Cmd::Exit, tag("quit")),
        value(Cmd::Exit, tag("q")),
    ))(input)
}

/// Parses a command line such as `month 2025 9`, `page next` or `today`.
pub fn parse_command(line: &str) -> Result<Cmd> {
    let line = line.trim();
    let res: IResult<&str, Cmd> = all_consuming(alt((month_cmd, page_cmd, plain_cmd)))(line);

    res.map(|(_, cmd)| cmd)
        .map_err(|_| Error::new(ErrorKind::CommandParse, line))
}

/// Parses `YYYY-MM` (or `YYYY MM`) into a cursor.
pub fn parse_month(s: &str) -> Result<MonthCursor> {
    let res: IResult<&str, (i32, i32)> = all_consuming(year_month)(s.trim());

    let (_, (year, month)) = res?;
    Ok(MonthCursor::new(year, month))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_commands() {
        assert_eq!(parse_command("month prev").unwrap(), Cmd::PrevMonth);
        assert_eq!(parse_command(" month next ").unwrap(), Cmd::NextMonth);
        assert_eq!(
            parse_command("month 2025 9").unwrap(),
            Cmd::GoToMonth {
                year: 2025,
                month: 9
            }
        );
        assert_eq!(
            parse_command("month -44-3").unwrap(),
            Cmd::GoToMonth {
                year: -44,
                month: 3
            }
        );
    }

    #[test]
    fn page_commands() {
        assert_eq!(
            parse_command("page next").unwrap(),
            Cmd::Page(PageIntent::Next)
        );
        assert_eq!(
            parse_command("page 12").unwrap(),
            Cmd::Page(PageIntent::Page(12))
        );
        assert!(parse_command("page twelve").is_err());
    }

    #[test]
    fn plain_commands() {
        assert_eq!(parse_command("today").unwrap(), Cmd::Today);
        assert_eq!(parse_command("quit").unwrap(), Cmd::Exit);
        assert_eq!(parse_command("q").unwrap(), Cmd::Exit);
    }

    #[test]
    fn rejects_unknown() {
        let err = parse_command("fly away").unwrap_err();
        assert!(matches!(err.kind, ErrorKind::CommandParse));
        assert!(parse_command("month").is_err());
        assert!(parse_command("todayx").is_err());
    }

    #[test]
    fn month_argument() {
        assert_eq!(parse_month("2025-09").unwrap(), MonthCursor::new(2025, 9));
        assert_eq!(parse_month("2024-13").unwrap(), MonthCursor::new(2025, 1));
        assert!(parse_month("September").is_err());
    }
}
