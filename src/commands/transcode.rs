use crate::io::read_input;
use textcodec::dispatch::{transcode_with, Outcome};
use textcodec::error::Result;
use textcodec::types::{Context, InputSource, Mode};

pub fn run_transcode(ctx: &Context, mode: Mode, scheme: &str, input: &InputSource) -> Result<Outcome> {
    // resolve the scheme before touching stdin
    ctx.registry.lookup(scheme)?;
    let text = read_input(input)?;
    transcode_with(ctx.registry, mode, scheme, &text)
}
