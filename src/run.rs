mod options;

pub use self::options::Options;
use crate::{
    context::Context, debug, error::ApplicationError, filter::DependencyFilter, join::join_lines,
    parse::parse_rule, resolve::TargetResolver, rule::Rule, targets::enumerate_targets,
    wrap::wrap,
};

pub async fn run(context: &Context, options: &Options) -> Result<(), ApplicationError> {
    let targets = enumerate_targets(context, options).await?;

    debug!(context, options, "{} targets found", targets.len());

    let filter = DependencyFilter::new(
        options.inclusions.iter().map(String::as_str),
        options.exclusions.iter().map(String::as_str),
    )?;
    let mut resolver = TargetResolver::new(
        options.resolution,
        targets,
        options.object_extension.as_str(),
    );
    let mut source = String::new();

    context
        .console()
        .lock()
        .await
        .read_stdin(&mut source)
        .await?;

    let mut output = String::new();

    for line in join_lines(&source)? {
        output.push_str(
            &rewrite_rule(
                context,
                options,
                &mut resolver,
                &filter,
                &parse_rule(&line)?,
            )
            .await?,
        );
    }

    // Nothing is written unless every rule is rewritten.
    context
        .console()
        .lock()
        .await
        .write_stdout(output.as_bytes())
        .await?;

    Ok(())
}

async fn rewrite_rule(
    context: &Context,
    options: &Options,
    resolver: &mut TargetResolver,
    filter: &DependencyFilter,
    rule: &Rule<'_>,
) -> Result<String, ApplicationError> {
    let target = resolver.resolve(rule.target())? + ":";

    debug!(context, options, "target {} resolved to {}", rule.target(), target);

    let mut dependencies = vec![];

    for &dependency in rule.dependencies() {
        if filter.is_included(dependency) {
            dependencies.push(dependency);
        } else {
            debug!(context, options, "dependency {} of {} removed", dependency, target);
        }
    }

    Ok(wrap(
        options.width,
        [target.as_str()].into_iter().chain(dependencies),
    ))
}
