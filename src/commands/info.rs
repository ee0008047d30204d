use textcodec::error::Result;
use textcodec::types::{CodecMeta, Context};

pub fn run_info(ctx: &Context, scheme: &str) -> Result<CodecMeta> {
    let codec = ctx.registry.get(scheme)?;
    Ok(codec.meta())
}

pub fn run_list(ctx: &Context) -> Vec<CodecMeta> {
    ctx.registry.list()
}
