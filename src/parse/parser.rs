use crate::rule::Rule;
use nom::{
    IResult, Parser,
    bytes::complete::tag,
    character::complete::{multispace0, none_of},
    combinator::{all_consuming, map, recognize, value},
    multi::{many0, many1_count},
};

const SPACE_CHARACTERS: &str = " \t\r\n";
const TARGET_EXCLUDED_CHARACTERS: &str = " \t\r\n:";

pub fn rule(input: &str) -> IResult<&str, Rule<'_>> {
    map(
        all_consuming((target, sign(":"), many0(dependency), blank)),
        |(target, _, dependencies, _)| Rule::new(target, dependencies),
    )
    .parse(input)
}

fn target(input: &str) -> IResult<&str, &str> {
    token(recognize(many1_count(none_of(TARGET_EXCLUDED_CHARACTERS)))).parse(input)
}

fn dependency(input: &str) -> IResult<&str, &str> {
    token(recognize(many1_count(none_of(SPACE_CHARACTERS)))).parse(input)
}

fn sign(sign: &'static str) -> impl Fn(&str) -> IResult<&str, ()> {
    move |input| value((), token(tag(sign))).parse(input)
}

fn token<'a, O>(
    mut parser: impl Parser<&'a str, Output = O, Error = nom::error::Error<&'a str>>,
) -> impl FnMut(&'a str) -> IResult<&'a str, O> {
    move |input| {
        let (input, _) = blank(input)?;

        parser.parse(input)
    }
}

fn blank(input: &str) -> IResult<&str, ()> {
    value((), multispace0).parse(input)
}
