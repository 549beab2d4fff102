//! Array allocation lowering.
//!
//! `new T[a][b][]` with K sized and N-K unsized dimensions becomes one
//! statement expression per sized dimension: the outer size is evaluated
//! once, one array of the remaining element type is allocated, and for
//! K > 1 a loop fills every slot with the next level's allocation.

use jtc_ir::{ExprId, TypeNode};

use super::CodeGenerator;
use crate::context::{prec, Cx, Scope};
use crate::emitter::Emitter;
use crate::error::CodegenError;

impl<E: Emitter> CodeGenerator<'_, E> {
    /// `sizes` must be non-empty. `depth` keeps temporaries of nested
    /// levels distinct.
    pub(crate) fn new_array(
        &mut self,
        element: &TypeNode,
        sizes: &[ExprId],
        unsized_dims: u8,
        depth: usize,
        cx: Cx,
    ) -> Result<(), CodegenError> {
        let Some((&outer, rest)) = sizes.split_first() else {
            return Ok(());
        };
        let sized = u8::try_from(sizes.len()).unwrap_or(u8::MAX);
        let dims = element.dims.saturating_add(sized).saturating_add(unsized_dims);
        let array = self.mangler.type_ref(&element.clone().with_dims(dims));
        let slot = self.mangler.type_ref(&element.clone().with_dims(dims - 1));

        self.out.p(&format!("({{ int32_t __dim{depth} = "));
        self.expr(
            outer,
            cx.without(Scope::IN_CALL | Scope::IN_PRINT | Scope::IN_CONCAT)
                .with_prec(prec::LIST),
        )?;
        self.out.p(&format!(
            "; {array} __arr{depth} = new __rt::Array<{slot}>(__dim{depth}); "
        ));

        if !rest.is_empty() {
            self.out.p(&format!(
                "for (int32_t __i{depth} = 0; __i{depth} < __dim{depth}; __i{depth}++) {{ __arr{depth}->__data[__i{depth}] = "
            ));
            self.new_array(element, rest, unsized_dims, depth + 1, cx)?;
            self.out.p("; } ");
        }

        self.out.p(&format!("__arr{depth}; }})"));
        Ok(())
    }
}
