// Generated by meridian-fhir-gen from FHIR 4.0.1 definitions. Do not edit by hand.

use crate::macros::code_system;

code_system! {
    /// The type of an address (physical / postal).
    AddressType, system = "http://hl7.org/fhir/address-type" {
        /// Mailing addresses - PO Boxes and care-of addresses.
        Postal => ("postal", "Postal"),
        /// A physical address that can be visited.
        Physical => ("physical", "Physical"),
        /// An address that is both physical and postal.
        Both => ("both", "Postal & Physical"),
    }
}

code_system! {
    /// The use of an address.
    AddressUse, system = "http://hl7.org/fhir/address-use" {
        /// A communication address at a home.
        Home => ("home", "Home"),
        /// An office address. First choice for business related contacts during business hours.
        Work => ("work", "Work"),
        /// A temporary address. The period can provide more detailed information.
        Temp => ("temp", "Temporary"),
        /// This address is no longer in use (or was never correct but retained for records).
        Old => ("old", "Old / Incorrect"),
        /// An address to be used to send bills, invoices, receipts etc.
        Billing => ("billing", "Billing"),
    }
}

code_system! {
    /// The gender of a person used for administrative purposes.
    AdministrativeGender, system = "http://hl7.org/fhir/administrative-gender" {
        /// Male.
        Male => ("male", "Male"),
        /// Female.
        Female => ("female", "Female"),
        /// Other.
        Other => ("other", "Other"),
        /// Unknown.
        Unknown => ("unknown", "Unknown"),
    }
}

code_system! {
    /// How resource references can be aggregated.
    AggregationMode, system = "http://hl7.org/fhir/resource-aggregation-mode" {
        /// The reference is a local reference to a contained resource.
        Contained => ("contained", "Contained"),
        /// The reference to a resource that has to be resolved externally to the resource that includes the reference.
        Referenced => ("referenced", "Referenced"),
        /// The resource the reference points to will be found in the same bundle as the resource that includes the reference.
        Bundled => ("bundled", "Bundled"),
    }
}

code_system! {
    /// Indication of the degree of conformance expectations associated with a binding.
    BindingStrength, system = "http://hl7.org/fhir/binding-strength" {
        Required => ("required", "Required"),
        Extensible => ("extensible", "Extensible"),
        Preferred => ("preferred", "Preferred"),
        Example => ("example", "Example"),
    }
}

code_system! {
    /// Indicates the purpose of a bundle - how it is intended to be used.
    BundleType, system = "http://hl7.org/fhir/bundle-type" {
        /// The bundle is a document. The first resource is a Composition.
        Document => ("document", "Document"),
        /// The bundle is a message. The first resource is a MessageHeader.
        Message => ("message", "Message"),
        /// The bundle is a transaction - intended to be processed by a server as an atomic commit.
        Transaction => ("transaction", "Transaction"),
        /// The bundle is a transaction response.
        TransactionResponse => ("transaction-response", "Transaction Response"),
        /// The bundle is a set of actions - intended to be processed by a server as a group of independent actions.
        Batch => ("batch", "Batch"),
        /// The bundle is a batch response.
        BatchResponse => ("batch-response", "Batch Response"),
        /// The bundle is a list of resources from a history interaction on a server.
        History => ("history", "History List"),
        /// The bundle is a list of resources returned as a result of a search/query interaction, operation, or message.
        Searchset => ("searchset", "Search Results"),
        /// The bundle is a set of resources collected into a single package for ease of distribution.
        Collection => ("collection", "Collection"),
    }
}

code_system! {
    /// Resource types defined as part of FHIR that can be represented as in-line definitions of a care plan activity.
    CarePlanActivityKind, system = "http://hl7.org/fhir/resource-types" {
        Appointment => ("Appointment", "Appointment"),
        CommunicationRequest => ("CommunicationRequest", "CommunicationRequest"),
        DeviceRequest => ("DeviceRequest", "DeviceRequest"),
        MedicationRequest => ("MedicationRequest", "MedicationRequest"),
        NutritionOrder => ("NutritionOrder", "NutritionOrder"),
        Task => ("Task", "Task"),
        ServiceRequest => ("ServiceRequest", "ServiceRequest"),
        VisionPrescription => ("VisionPrescription", "VisionPrescription"),
    }
}

code_system! {
    /// Codes that reflect the current state of a care plan activity within its overall life cycle.
    CarePlanActivityStatus, system = "http://hl7.org/fhir/care-plan-activity-status" {
        /// Care plan activity is planned but no action has yet been taken.
        NotStarted => ("not-started", "Not Started"),
        /// Appointment or other booking has occurred but activity has not yet begun.
        Scheduled => ("scheduled", "Scheduled"),
        /// Care plan activity has been started but is not yet complete.
        InProgress => ("in-progress", "In Progress"),
        /// Care plan activity was started but has temporarily ceased with an expectation of resumption at a future time.
        OnHold => ("on-hold", "On Hold"),
        /// Care plan activity has been completed (more or less) as planned.
        Completed => ("completed", "Completed"),
        /// The planned care plan activity has been withdrawn.
        Cancelled => ("cancelled", "Cancelled"),
        /// The planned care plan activity has been ended prior to completion after the activity was started.
        Stopped => ("stopped", "Stopped"),
        /// The current state of the care plan activity is not known.
        Unknown => ("unknown", "Unknown"),
        /// Care plan activity was entered in error and voided.
        EnteredInError => ("entered-in-error", "Entered in Error"),
    }
}

code_system! {
    /// Codes indicating the degree of authority/intentionality associated with a care plan.
    CarePlanIntent, system = "http://hl7.org/fhir/request-intent" {
        /// The request is a suggestion made by someone/something that does not have an intention to ensure it occurs and without providing an authorization to act.
        Proposal => ("proposal", "Proposal"),
        /// The request represents an intention to ensure something occurs without providing an authorization for others to act.
        Plan => ("plan", "Plan"),
        /// The request represents a request/demand and authorization for action by a Practitioner.
        Order => ("order", "Order"),
        /// The request represents a component or option for a RequestGroup that establishes timing, conditionality and/or other constraints among a set of requests.
        Option => ("option", "Option"),
    }
}

code_system! {
    /// SHALL applications comply with this constraint?
    ConstraintSeverity, system = "http://hl7.org/fhir/constraint-severity" {
        /// If the constraint is violated, the resource is not conformant.
        Error => ("error", "Error"),
        /// If the constraint is violated, the resource is conformant, but it is not necessarily following best practice.
        Warning => ("warning", "Warning"),
    }
}

code_system! {
    /// Telecommunications form for contact point.
    ContactPointSystem, system = "http://hl7.org/fhir/contact-point-system" {
        Phone => ("phone", "Phone"),
        Fax => ("fax", "Fax"),
        Email => ("email", "Email"),
        Pager => ("pager", "Pager"),
        Url => ("url", "URL"),
        Sms => ("sms", "SMS"),
        Other => ("other", "Other"),
    }
}

code_system! {
    /// Use of contact point.
    ContactPointUse, system = "http://hl7.org/fhir/contact-point-use" {
        Home => ("home", "Home"),
        Work => ("work", "Work"),
        Temp => ("temp", "Temp"),
        Old => ("old", "Old"),
        Mobile => ("mobile", "Mobile"),
    }
}

code_system! {
    /// The days of the week.
    DaysOfWeek, system = "http://hl7.org/fhir/days-of-week" {
        Mon => ("mon", "Monday"),
        Tue => ("tue", "Tuesday"),
        Wed => ("wed", "Wednesday"),
        Thu => ("thu", "Thursday"),
        Fri => ("fri", "Friday"),
        Sat => ("sat", "Saturday"),
        Sun => ("sun", "Sunday"),
    }
}

code_system! {
    /// How an element value is interpreted when discrimination is evaluated.
    DiscriminatorType, system = "http://hl7.org/fhir/discriminator-type" {
        /// The slices have different values in the nominated element.
        Value => ("value", "Value"),
        /// The slices are differentiated by the presence or absence of the nominated element.
        Exists => ("exists", "Exists"),
        /// The slices have different values in the nominated element, as determined by testing them against the applicable ElementDefinition.pattern\[x\].
        Pattern => ("pattern", "Pattern"),
        /// The slices are differentiated by type of the nominated element.
        Type => ("type", "Type"),
        /// The slices are differentiated by conformance of the nominated element to a specified profile.
        Profile => ("profile", "Profile"),
    }
}

code_system! {
    /// How an extension context is interpreted.
    ExtensionContextType, system = "http://hl7.org/fhir/extension-context-type" {
        /// The context is all elements that match the FHIRPath query found in the expression.
        Fhirpath => ("fhirpath", "FHIRPath"),
        /// The context is any element that has an ElementDefinition.id that matches that found in the expression.
        Element => ("element", "Element ID"),
        /// The context is a particular extension from a particular StructureDefinition.
        Extension => ("extension", "Extension URL"),
    }
}

code_system! {
    /// This value set includes Status codes.
    FinancialResourceStatusCodes, system = "http://hl7.org/fhir/fm-status" {
        /// The instance is currently in-force.
        Active => ("active", "Active"),
        /// The instance is withdrawn, rescinded or reversed.
        Cancelled => ("cancelled", "Cancelled"),
        /// A new instance the contents of which is not complete.
        Draft => ("draft", "Draft"),
        /// The instance was entered in error.
        EnteredInError => ("entered-in-error", "Entered in Error"),
    }
}

code_system! {
    /// HTTP verbs (in the HTTP command line).
    HttpVerb, system = "http://hl7.org/fhir/http-verb" {
        Get => ("GET", "GET"),
        Head => ("HEAD", "HEAD"),
        Post => ("POST", "POST"),
        Put => ("PUT", "PUT"),
        Delete => ("DELETE", "DELETE"),
        Patch => ("PATCH", "PATCH"),
    }
}

code_system! {
    /// Identifies the purpose for this identifier, if known.
    IdentifierUse, system = "http://hl7.org/fhir/identifier-use" {
        /// The identifier recommended for display and use in real-world interactions.
        Usual => ("usual", "Usual"),
        /// The identifier considered to be most trusted for the identification of this item.
        Official => ("official", "Official"),
        /// A temporary identifier.
        Temp => ("temp", "Temp"),
        /// An identifier that was assigned in secondary use - it serves to identify the object in a relative context, but cannot be consistently assigned to the same object again in a different context.
        Secondary => ("secondary", "Secondary"),
        /// The identifier id no longer considered valid, but may be relevant for search purposes.
        Old => ("old", "Old"),
    }
}

code_system! {
    /// The type of link between this patient resource and another patient resource.
    LinkType, system = "http://hl7.org/fhir/link-type" {
        ReplacedBy => ("replaced-by", "Replaced-by"),
        Replaces => ("replaces", "Replaces"),
        Refer => ("refer", "Refer"),
        Seealso => ("seealso", "See also"),
    }
}

code_system! {
    /// MedicationRequest Intent Codes
    MedicationRequestIntent, system = "http://hl7.org/fhir/CodeSystem/medicationrequest-intent" {
        Proposal => ("proposal", "Proposal"),
        Plan => ("plan", "Plan"),
        Order => ("order", "Order"),
        OriginalOrder => ("original-order", "Original Order"),
        ReflexOrder => ("reflex-order", "Reflex Order"),
        FillerOrder => ("filler-order", "Filler Order"),
        InstanceOrder => ("instance-order", "Instance Order"),
        Option => ("option", "Option"),
    }
}

code_system! {
    /// MedicationRequest Status Codes
    MedicationRequestStatus, system = "http://hl7.org/fhir/CodeSystem/medicationrequest-status" {
        Active => ("active", "Active"),
        OnHold => ("on-hold", "On Hold"),
        Cancelled => ("cancelled", "Cancelled"),
        Completed => ("completed", "Completed"),
        EnteredInError => ("entered-in-error", "Entered in Error"),
        Stopped => ("stopped", "Stopped"),
        Draft => ("draft", "Draft"),
        Unknown => ("unknown", "Unknown"),
    }
}

code_system! {
    /// The use of a human name.
    NameUse, system = "http://hl7.org/fhir/name-use" {
        /// Known as/conventional/the one you normally use.
        Usual => ("usual", "Usual"),
        /// The formal name as registered in an official (government) registry, but which name might not be commonly used.
        Official => ("official", "Official"),
        /// A temporary name.
        Temp => ("temp", "Temp"),
        /// A name that is used to address the person in an informal manner, but is not part of their formal or usual name.
        Nickname => ("nickname", "Nickname"),
        /// Anonymous assigned name, alias, or pseudonym (used to protect a person's identity for privacy reasons).
        Anonymous => ("anonymous", "Anonymous"),
        /// This name is no longer in use (or was never correct, but retained for records).
        Old => ("old", "Old"),
        /// A name used prior to changing name because of marriage.
        Maiden => ("maiden", "Name changed for Marriage"),
    }
}

code_system! {
    /// The status of a resource narrative.
    NarrativeStatus, system = "http://hl7.org/fhir/narrative-status" {
        /// The contents of the narrative are entirely generated from the core elements in the content.
        Generated => ("generated", "Generated"),
        /// The contents of the narrative are entirely generated from the core elements in the content and some of the content is generated from extensions.
        Extensions => ("extensions", "Extensions"),
        /// The contents of the narrative may contain additional information not found in the structured data.
        Additional => ("additional", "Additional"),
        /// The contents of the narrative are some equivalent of "No human-readable text provided in this case".
        Empty => ("empty", "Empty"),
    }
}

code_system! {
    /// Codes providing the status of an observation.
    ObservationStatus, system = "http://hl7.org/fhir/observation-status" {
        /// The existence of the observation is registered, but there is no result yet available.
        Registered => ("registered", "Registered"),
        /// This is an initial or interim observation: data may be incomplete or unverified.
        Preliminary => ("preliminary", "Preliminary"),
        /// The observation is complete and there are no further actions needed.
        Final => ("final", "Final"),
        /// Subsequent to being Final, the observation has been modified subsequent.
        Amended => ("amended", "Amended"),
        /// Subsequent to being Final, the observation has been modified to correct an error in the test result.
        Corrected => ("corrected", "Corrected"),
        /// The observation is unavailable because the measurement was not started or not completed.
        Cancelled => ("cancelled", "Cancelled"),
        /// The observation has been withdrawn following previous final release.
        EnteredInError => ("entered-in-error", "Entered in Error"),
        /// The authoring/source system does not know which of the status values currently applies for this observation.
        Unknown => ("unknown", "Unknown"),
    }
}

code_system! {
    /// How a property is represented when serialized.
    PropertyRepresentation, system = "http://hl7.org/fhir/property-representation" {
        XmlAttr => ("xmlAttr", "XML Attribute"),
        XmlText => ("xmlText", "XML Text"),
        TypeAttr => ("typeAttr", "Type Attribute"),
        CdaText => ("cdaText", "CDA Text Format"),
        Xhtml => ("xhtml", "XHTML"),
    }
}

code_system! {
    /// The lifecycle status of an artifact.
    PublicationStatus, system = "http://hl7.org/fhir/publication-status" {
        /// This resource is still under development and is not yet considered to be ready for normal use.
        Draft => ("draft", "Draft"),
        /// This resource is ready for normal use.
        Active => ("active", "Active"),
        /// This resource has been withdrawn or superseded and should no longer be used.
        Retired => ("retired", "Retired"),
        /// The authoring system does not know which of the status values currently applies for this resource.
        Unknown => ("unknown", "Unknown"),
    }
}

code_system! {
    /// How the Quantity should be understood and represented.
    QuantityComparator, system = "http://hl7.org/fhir/quantity-comparator" {
        /// The actual value is less than the given value.
        LessThan => ("<", "Less than"),
        /// The actual value is less than or equal to the given value.
        LessOrEqualTo => ("<=", "Less or Equal to"),
        /// The actual value is greater than or equal to the given value.
        GreaterOrEqualTo => (">=", "Greater or Equal to"),
        /// The actual value is greater than the given value.
        GreaterThan => (">", "Greater than"),
    }
}

code_system! {
    /// Whether a reference needs to be version specific or version independent, or whether either can be used.
    ReferenceVersionRules, system = "http://hl7.org/fhir/reference-version-rules" {
        Either => ("either", "Either Specific or independent"),
        Independent => ("independent", "Version independent"),
        Specific => ("specific", "Version Specific"),
    }
}

code_system! {
    /// The clinical priority of a diagnostic order.
    RequestPriority, system = "http://hl7.org/fhir/request-priority" {
        /// The request has normal priority.
        Routine => ("routine", "Routine"),
        /// The request should be actioned promptly - higher priority than routine.
        Urgent => ("urgent", "Urgent"),
        /// The request should be actioned as soon as possible - higher priority than urgent.
        Asap => ("asap", "ASAP"),
        /// The request should be actioned immediately - highest possible priority.
        Stat => ("stat", "STAT"),
    }
}

code_system! {
    /// Codes identifying the lifecycle stage of a request.
    RequestStatus, system = "http://hl7.org/fhir/request-status" {
        /// The request has been created but is not yet complete or ready for action.
        Draft => ("draft", "Draft"),
        /// The request is in force and ready to be acted upon.
        Active => ("active", "Active"),
        /// The request (and any implicit authorization to act) has been temporarily withdrawn but is expected to resume in the future.
        OnHold => ("on-hold", "On Hold"),
        /// The request (and any implicit authorization to act) has been terminated prior to the known full completion of the intended actions.
        Revoked => ("revoked", "Revoked"),
        /// The activity described by the request has been fully performed.
        Completed => ("completed", "Completed"),
        /// This request should never have existed and should be considered 'void'.
        EnteredInError => ("entered-in-error", "Entered in Error"),
        /// The authoring/source system does not know which of the status values currently applies for this request.
        Unknown => ("unknown", "Unknown"),
    }
}

code_system! {
    /// Why an entry is in the result set - whether it's included as a match or because of an _include requirement, or to convey information or warning information about the search process.
    SearchEntryMode, system = "http://hl7.org/fhir/search-entry-mode" {
        /// This resource matched the search specification.
        Match => ("match", "Match"),
        /// This resource is returned because it is referred to from another resource in the search set.
        Include => ("include", "Include"),
        /// An OperationOutcome that provides additional information about the processing of a search.
        Outcome => ("outcome", "Outcome"),
    }
}

code_system! {
    /// How slices are interpreted when evaluating an instance.
    SlicingRules, system = "http://hl7.org/fhir/resource-slicing-rules" {
        /// No additional content is allowed other than that described by the slices in this profile.
        Closed => ("closed", "Closed"),
        /// Additional content is allowed anywhere in the list.
        Open => ("open", "Open"),
        /// Additional content is allowed, but only at the end of the list.
        OpenAtEnd => ("openAtEnd", "Open at End"),
    }
}

code_system! {
    /// Defines the type of structure that a definition is describing.
    StructureDefinitionKind, system = "http://hl7.org/fhir/structure-definition-kind" {
        /// A primitive type that has a value and an extension.
        PrimitiveType => ("primitive-type", "Primitive Data Type"),
        /// A  complex structure that defines a set of data elements that is suitable for use in 'resources'.
        ComplexType => ("complex-type", "Complex Data Type"),
        /// A 'resource' - a directed acyclic graph of elements that aggregrates other types into an identifiable entity.
        Resource => ("resource", "Resource"),
        /// A pattern or a template that is not intended to be a real resource or complex type.
        Logical => ("logical", "Logical"),
    }
}

code_system! {
    /// How a type relates to its baseDefinition.
    TypeDerivationRule, system = "http://hl7.org/fhir/type-derivation-rule" {
        /// This definition defines a new type that adds additional elements to the base type.
        Specialization => ("specialization", "Specialization"),
        /// This definition adds additional rules to an existing concrete type.
        Constraint => ("constraint", "Constraint"),
    }
}

code_system! {
    /// A unit of time (units from UCUM).
    UnitsOfTime, system = "http://unitsofmeasure.org" {
        S => ("s", "second"),
        Min => ("min", "minute"),
        H => ("h", "hour"),
        D => ("d", "day"),
        Wk => ("wk", "week"),
        Mo => ("mo", "month"),
        A => ("a", "year"),
    }
}
