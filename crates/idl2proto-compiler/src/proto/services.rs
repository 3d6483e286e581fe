//! Service emission: request/response synthesis and inheritance flattening.
//!
//! Every directly declared function gets a `<Method>PRequest` message with
//! its arguments and, unless it returns a typedef, a `<Method>PResponse`
//! wrapper for the return value. Functions inherited through `extends` only
//! contribute RPC lines that point at the ancestor's messages, qualified
//! with the ancestor's package.

use std::collections::{HashMap, HashSet};
use std::fmt::Write;

use idl2proto_core::utils::to_pascal_case;
use idl2proto_core::{Function, Program, ProgramKey, Service, Type};
use tracing::debug;

use super::EMPTY_TYPE;
use super::emitter::{Emitter, FieldLine};
use super::namespace;
use crate::{Error, Origin, Result};

pub(super) const REQUEST_SUFFIX: &str = "PRequest";
pub(super) const RESPONSE_SUFFIX: &str = "PResponse";

/// Field name used in origins of return types.
const RETURN_FIELD: &str = "return";

/// A service with its `extends` chain resolved.
pub(super) struct ServicePlan<'a> {
    pub service: &'a Service,
    /// Functions of all ancestors, nearest ancestor first
    pub inherited: Vec<Inherited<'a>>,
}

pub(super) struct Inherited<'a> {
    /// Program declaring the ancestor
    pub program: &'a Program,
    pub ancestor: &'a Service,
    pub function: &'a Function,
}

impl ServicePlan<'_> {
    pub fn returns_void(&self) -> bool {
        self.service.functions.iter().any(|f| f.returns.is_void())
            || self.inherited.iter().any(|i| i.function.returns.is_void())
    }
}

struct Rpc<'a> {
    /// Source function, for diagnostics
    source: String,
    method: String,
    request: String,
    response: String,
    doc: Option<&'a str>,
}

impl<'a, W: Write> Emitter<'a, W> {
    /// Resolve the `extends` chain of `service` up to its root.
    pub(super) fn plan_service(&self, service: &'a Service) -> Result<ServicePlan<'a>> {
        let at = self.origin(&service.name);
        let mut seen: HashSet<(ProgramKey, &str)> = HashSet::new();
        seen.insert((self.program.key.clone(), service.name.as_str()));

        let mut inherited = Vec::new();
        let mut parent = service.extends.as_ref();
        while let Some(r) = parent {
            if !seen.insert((r.program.clone(), r.name.as_str())) {
                return Err(Error::CyclicInheritance {
                    at,
                    service: r.name.clone(),
                });
            }
            let program = self.types.resolve(&r.program, &r.name, &at)?;
            let ancestor = program
                .service(&r.name)
                .ok_or_else(|| Error::UnknownService {
                    at: at.clone(),
                    program: r.program.clone(),
                    service: r.name.clone(),
                })?;
            inherited.extend(ancestor.functions.iter().map(|function| Inherited {
                program,
                ancestor,
                function,
            }));
            parent = ancestor.extends.as_ref();
        }

        debug!(
            service = %service.name,
            inherited = inherited.len(),
            "flattened service inheritance"
        );
        Ok(ServicePlan { service, inherited })
    }

    /// Emit request/response messages of the direct functions, then the
    /// `service` block with direct and inherited RPCs.
    pub(super) fn emit_service(&mut self, plan: &ServicePlan<'a>) -> Result<()> {
        let service = plan.service;
        let mut rpcs = Vec::with_capacity(service.functions.len() + plan.inherited.len());

        for function in &service.functions {
            let method = to_pascal_case(&function.name);
            let entity = format!("{}.{}", service.name, function.name);

            let request = format!("{method}{REQUEST_SUFFIX}");
            self.claim(&request, || format!("request of `{entity}`"))?;
            let lines = self.field_lines(&entity, &function.args)?;
            self.write_message(&request, None, &lines)?;

            let response = self.emit_response(function, &method, &entity)?;
            rpcs.push(Rpc {
                source: format!("function `{entity}`"),
                method,
                request,
                response,
                doc: function.doc.as_deref(),
            });
        }
        for inherited in &plan.inherited {
            rpcs.push(self.inherited_rpc(inherited)?);
        }

        let name = to_pascal_case(&service.name);
        self.claim(&name, || format!("service `{}`", service.name))?;
        self.check_methods(service, &rpcs)?;

        self.emit_doc("", service.doc.as_deref())?;
        if rpcs.is_empty() {
            write!(self.out, "service {name} {{}}\n\n")?;
            return Ok(());
        }
        writeln!(self.out, "service {name} {{")?;
        for rpc in &rpcs {
            self.emit_doc("  ", rpc.doc)?;
            writeln!(
                self.out,
                "  rpc {} ({}) returns ({});",
                rpc.method, rpc.request, rpc.response
            )?;
        }
        write!(self.out, "}}\n\n")?;
        Ok(())
    }

    /// Emit the response wrapper of a direct function and return the name
    /// the RPC line refers to.
    fn emit_response(&mut self, function: &Function, method: &str, entity: &str) -> Result<String> {
        let at = self.origin(entity).field(RETURN_FIELD);
        match &function.returns {
            // The typedef's wrapper message already carries the value
            Type::Typedef(r) => self.types.reference(r, &at),
            ty if ty.is_void() && self.config.uses_well_known_empty() => {
                Ok(EMPTY_TYPE.to_string())
            }
            ty => {
                let response = format!("{method}{RESPONSE_SUFFIX}");
                self.claim(&response, || format!("response of `{entity}`"))?;
                let lines = if ty.is_void() {
                    Vec::new()
                } else {
                    vec![FieldLine::value(self.types.map(ty, &at)?)]
                };
                self.write_message(&response, None, &lines)?;
                Ok(response)
            }
        }
    }

    fn inherited_rpc(&self, inherited: &Inherited<'a>) -> Result<Rpc<'a>> {
        let function = inherited.function;
        let package = namespace::package_name(inherited.program, &self.config.fallback_package);
        let method = to_pascal_case(&function.name);

        let response = match &function.returns {
            Type::Typedef(r) => {
                let at = Origin::new(
                    &inherited.program.key,
                    format!("{}.{}", inherited.ancestor.name, function.name),
                )
                .field(RETURN_FIELD);
                let declaring = self.types.resolve(&r.program, &r.name, &at)?;
                format!(
                    "{}.{}",
                    namespace::package_name(declaring, &self.config.fallback_package),
                    to_pascal_case(&r.name)
                )
            }
            ty if ty.is_void() && self.config.uses_well_known_empty() => EMPTY_TYPE.to_string(),
            _ => format!("{package}.{method}{RESPONSE_SUFFIX}"),
        };

        Ok(Rpc {
            source: format!(
                "inherited function `{}.{}`",
                inherited.ancestor.name, function.name
            ),
            request: format!("{package}.{method}{REQUEST_SUFFIX}"),
            response,
            method,
            doc: function.doc.as_deref(),
        })
    }

    /// RPC names are scoped to the service; an inherited method must not
    /// shadow a direct one.
    fn check_methods(&self, service: &Service, rpcs: &[Rpc<'_>]) -> Result<()> {
        let mut methods: HashMap<&str, &str> = HashMap::new();
        for rpc in rpcs {
            if let Some(first) = methods.insert(&rpc.method, &rpc.source) {
                return Err(Error::NameCollision {
                    program: self.program.key.clone(),
                    name: format!("{}.{}", to_pascal_case(&service.name), rpc.method),
                    first: first.to_string(),
                    second: rpc.source.clone(),
                });
            }
        }
        Ok(())
    }
}
